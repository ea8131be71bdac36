//! `chrome.storage.sync` backend.

use js_sys::{Object, Reflect};
use prompt_stash::{PromptTemplate, Result, StashError, TemplateStore};
use wasm_bindgen::JsValue;

use crate::chrome::{self, error_message, serde_error};

/// Stores the template list as one synced entry.
#[derive(Debug, Clone)]
pub struct SyncStore {
    key: String,
}

impl SyncStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

fn storage_error(value: JsValue) -> StashError {
    StashError::Storage(error_message(&value))
}

impl TemplateStore for SyncStore {
    async fn load(&self) -> Result<Option<Vec<PromptTemplate>>> {
        let keys = serde_wasm_bindgen::to_value(&[self.key.as_str()]).map_err(serde_error)?;
        let entries = chrome::sync_get(keys).await.map_err(storage_error)?;
        let value = Reflect::get(&entries, &JsValue::from_str(&self.key)).map_err(storage_error)?;

        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(serde_error)
    }

    async fn save(&self, items: &[PromptTemplate]) -> Result<()> {
        let value = serde_wasm_bindgen::to_value(items).map_err(serde_error)?;
        let entry = Object::new();
        Reflect::set(&entry, &JsValue::from_str(&self.key), &value).map_err(storage_error)?;

        chrome::sync_set(entry.into()).await.map_err(storage_error)?;
        Ok(())
    }
}
