//! Browser side of prompt-stash: the Leptos popup and the content script.
//!
//! One wasm module serves both contexts. The JS loaders call
//! [`start_popup`] from `popup.html` and [`start_content_script`] from the
//! injected content script.

pub mod app;
pub mod bridge;
pub mod chrome;
pub mod components;
pub mod config;
pub mod content;
pub mod storage;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use crate::app::App;

// Panic messages and tracing events go to the devtools console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Mount the popup UI.
#[wasm_bindgen]
pub fn start_popup() {
    spawn_local(async {
        let config = config::load_config().await;
        leptos::mount::mount_to_body(move || view! { <App config=config /> });
    });
}

/// Start listening for prompts in the current page.
#[wasm_bindgen]
pub fn start_content_script() {
    spawn_local(async {
        let config = config::load_config().await;
        tracing::debug!(selector = %config.target_selector, "content script listening");
        content::listen(config);
    });
}
