//! Tab messaging through `chrome.tabs`.

use prompt_stash::{OutboundMessage, Result, StashError, TabBridge, TabId};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::chrome::{self, error_message, serde_error};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TabQuery {
    active: bool,
    current_window: bool,
}

#[derive(Debug, Deserialize)]
struct Tab {
    id: Option<i32>,
}

fn delivery_error(value: JsValue) -> StashError {
    StashError::Delivery(error_message(&value))
}

/// Delivers popup messages to the focused tab's content script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeTabs;

impl TabBridge for ChromeTabs {
    async fn active_tab(&self) -> Result<Option<TabId>> {
        let query = TabQuery {
            active: true,
            current_window: true,
        };
        let query = serde_wasm_bindgen::to_value(&query).map_err(serde_error)?;
        let tabs = chrome::tabs_query(query).await.map_err(delivery_error)?;
        let tabs: Vec<Tab> = serde_wasm_bindgen::from_value(tabs).map_err(serde_error)?;

        Ok(tabs.into_iter().next().and_then(|tab| tab.id).map(TabId))
    }

    async fn send_message(&self, tab: TabId, message: &OutboundMessage) -> Result<()> {
        let message = serde_wasm_bindgen::to_value(message).map_err(serde_error)?;
        chrome::tabs_send_message(tab.0, message)
            .await
            .map_err(delivery_error)?;
        Ok(())
    }
}
