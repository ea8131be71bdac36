//! Content script: listens for prompts from the popup and writes them into
//! the page.

use prompt_stash::{inject, Config, OutboundMessage, PageDocument, PromptField};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventInit, HtmlTextAreaElement};

use crate::chrome;

pub struct DomDocument(Document);

pub struct DomTextArea(HtmlTextAreaElement);

impl PromptField for DomTextArea {
    fn set_value(&self, value: &str) {
        self.0.set_value(value);

        // Let framework-managed inputs pick up the new value.
        let init = EventInit::new();
        init.set_bubbles(true);
        let dispatched = Event::new_with_event_init_dict("input", &init)
            .and_then(|event| self.0.dispatch_event(&event));
        if let Err(e) = dispatched {
            debug!(error = ?e, "failed to dispatch input event");
        }
    }
}

impl PageDocument for DomDocument {
    type Field = DomTextArea;

    fn find_field(&self, selector: &str) -> Option<DomTextArea> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
            .map(DomTextArea)
    }
}

/// Register the `chrome.runtime.onMessage` listener for the lifetime of the page.
pub fn listen(config: Config) {
    let on_message = Closure::<dyn FnMut(JsValue)>::new(move |raw: JsValue| {
        let message: OutboundMessage = match serde_wasm_bindgen::from_value(raw) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, "ignoring unrecognised message");
                return;
            }
        };

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let outcome = inject(&DomDocument(document), &config, &message);
        debug!(?outcome, action = %message.action, "handled message");
    });

    chrome::add_message_listener(&on_message);
    on_message.forget();
}
