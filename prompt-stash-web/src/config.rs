//! Loads the optional `stash.json` bundled at the extension root.

use gloo_net::http::Request;
use prompt_stash::Config;
use tracing::{debug, warn};

use crate::chrome;

pub const CONFIG_FILE: &str = "stash.json";

/// Fetch config overrides, falling back to defaults when the file is
/// missing or malformed.
pub async fn load_config() -> Config {
    if !chrome::is_extension() {
        return Config::default();
    }

    let url = chrome::runtime_get_url(CONFIG_FILE);
    let response = match Request::get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            debug!(error = %e, "no {} bundled, using defaults", CONFIG_FILE);
            return Config::default();
        }
    };

    if !response.ok() {
        debug!(status = response.status(), "no {} bundled, using defaults", CONFIG_FILE);
        return Config::default();
    }

    let contents = match response.text().await {
        Ok(contents) => contents,
        Err(e) => {
            warn!(error = %e, "Failed to read {}", CONFIG_FILE);
            return Config::default();
        }
    };

    Config::from_json(&contents).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring {}", CONFIG_FILE);
        Config::default()
    })
}
