//! Bindings to the WebExtension `chrome.*` APIs.
//!
//! Manifest V3 exposes promise-returning variants of these calls, so they
//! bind directly as async imports. When the page is not running inside an
//! extension (plain `trunk serve`), `is_extension` returns false and callers
//! fall back to browser-only behaviour.

use js_sys::Reflect;
use prompt_stash::StashError;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "storage", "sync"], js_name = get, catch)]
    pub async fn sync_get(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "storage", "sync"], js_name = set, catch)]
    pub async fn sync_set(items: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = query, catch)]
    pub async fn tabs_query(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = sendMessage, catch)]
    pub async fn tabs_send_message(tab_id: i32, message: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "runtime", "onMessage"], js_name = addListener)]
    pub fn add_message_listener(callback: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = getURL)]
    pub fn runtime_get_url(path: &str) -> String;
}

/// Check if we're running inside an extension context.
pub fn is_extension() -> bool {
    web_sys::window()
        .and_then(|w| Reflect::get(&w, &"chrome".into()).ok())
        .filter(|chrome| !chrome.is_undefined())
        .and_then(|chrome| Reflect::get(&chrome, &"runtime".into()).ok())
        .filter(|runtime| !runtime.is_undefined())
        .and_then(|runtime| Reflect::get(&runtime, &"id".into()).ok())
        .map(|id| !id.is_undefined())
        .unwrap_or(false)
}

/// Best-effort text of a rejected promise value (`chrome.runtime.lastError`
/// style objects carry a `message`).
pub fn error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn serde_error(e: serde_wasm_bindgen::Error) -> StashError {
    StashError::Serialization(e.to_string())
}
