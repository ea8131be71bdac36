//! Popup → content script messaging.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::Config;
use crate::error::{Result, StashError};

/// The single message shape sent to the page. No reply is defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub action: String,
    pub value: String,
}

impl OutboundMessage {
    pub fn new(action: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            value: value.into(),
        }
    }

    /// Message carrying a template body. An empty body is replaced by the
    /// configured fallback payload.
    pub fn prompt(config: &Config, body: &str) -> Self {
        let value = if body.is_empty() {
            config.fallback_payload.as_str()
        } else {
            body
        };
        Self::new(config.send_action.clone(), value)
    }
}

/// Browser tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub i32);

/// Access to the browser's tabs for message delivery.
#[allow(async_fn_in_trait)]
pub trait TabBridge {
    /// The focused tab of the current window, if there is one.
    async fn active_tab(&self) -> Result<Option<TabId>>;

    async fn send_message(&self, tab: TabId, message: &OutboundMessage) -> Result<()>;
}

/// Deliver `message` to the active tab once.
///
/// Nothing is sent when no active tab exists.
pub async fn send_prompt<B: TabBridge>(bridge: &B, message: &OutboundMessage) -> Result<TabId> {
    let tab = bridge.active_tab().await?.ok_or(StashError::NoActiveTab)?;
    bridge.send_message(tab, message).await?;
    debug!(tab = tab.0, action = %message.action, "prompt delivered");
    Ok(tab)
}

/// Fire-and-forget wrapper around [`send_prompt`]: failures are logged, never
/// returned.
pub async fn dispatch<B: TabBridge>(bridge: &B, message: &OutboundMessage) -> Option<TabId> {
    match send_prompt(bridge, message).await {
        Ok(tab) => Some(tab),
        Err(e) => {
            error!(error = %e, "Failed to send prompt");
            None
        }
    }
}
