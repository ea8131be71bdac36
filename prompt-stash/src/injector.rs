//! Content script side: write a received prompt into the page.
//!
//! The listener stays in a single "listening" state. Each matching message is
//! handled at most once and nothing is reported back to the popup.

use tracing::debug;

use crate::config::Config;
use crate::message::OutboundMessage;

/// An editable text element on the page.
pub trait PromptField {
    fn set_value(&self, value: &str);
}

/// The page the content script runs in.
pub trait PageDocument {
    type Field: PromptField;

    /// First element matching `selector`, if it is a text field.
    fn find_field(&self, selector: &str) -> Option<Self::Field>;
}

/// What happened to a received message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
    /// The target field now holds the prompt.
    Written,
    /// Right action, but the page has no target field.
    NoTarget,
    /// Message was meant for someone else.
    Ignored,
}

/// Text written into the field for a given prompt.
pub fn payload(config: &Config, value: &str) -> String {
    format!("{}{}", value, config.payload_suffix)
}

pub fn inject<D: PageDocument>(document: &D, config: &Config, message: &OutboundMessage) -> Injection {
    if message.action != config.send_action {
        return Injection::Ignored;
    }

    match document.find_field(&config.target_selector) {
        Some(field) => {
            field.set_value(&payload(config, &message.value));
            Injection::Written
        }
        None => {
            debug!(selector = %config.target_selector, "no target field on page");
            Injection::NoTarget
        }
    }
}
