//! Extension settings.
//!
//! Every field has a default matching the shipped extension, so an override
//! document only needs the keys it changes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StashError};

pub const DEFAULT_STORAGE_KEY: &str = "items";
pub const DEFAULT_SEND_ACTION: &str = "send_cs";
pub const DEFAULT_TARGET_SELECTOR: &str = "form textarea";
pub const DEFAULT_PAYLOAD_SUFFIX: &str = "\n\n\n";
pub const DEFAULT_FALLBACK_PAYLOAD: &str = "error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Synced storage entry holding the template list.
    pub storage_key: String,

    /// Action tag carried by popup → content script messages.
    pub send_action: String,

    /// CSS selector for the page element receiving the prompt.
    pub target_selector: String,

    /// Appended to every injected prompt.
    pub payload_suffix: String,

    /// Sent instead of an empty template body.
    pub fallback_payload: String,

    /// Seed the sample template when storage has never been written.
    pub seed_sample: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            send_action: DEFAULT_SEND_ACTION.to_string(),
            target_selector: DEFAULT_TARGET_SELECTOR.to_string(),
            payload_suffix: DEFAULT_PAYLOAD_SUFFIX.to_string(),
            fallback_payload: DEFAULT_FALLBACK_PAYLOAD.to_string(),
            seed_sample: true,
        }
    }
}

impl Config {
    /// Parse a JSON override document.
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| StashError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_extension() {
        let config = Config::default();
        assert_eq!(config.storage_key, "items");
        assert_eq!(config.send_action, "send_cs");
        assert_eq!(config.target_selector, "form textarea");
        assert_eq!(config.payload_suffix, "\n\n\n");
        assert_eq!(config.fallback_payload, "error");
        assert!(config.seed_sample);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = Config::from_json(r##"{"target_selector": "#prompt-textarea", "seed_sample": false}"##)
            .unwrap();
        assert_eq!(config.target_selector, "#prompt-textarea");
        assert!(!config.seed_sample);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.send_action, DEFAULT_SEND_ACTION);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_document_is_config_error() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, StashError::Config(_)));
    }
}
