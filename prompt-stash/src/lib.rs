//! Core of the prompt-stash browser extension.
//!
//! Everything here is plain Rust with no browser dependency: the template
//! record and list model, the popup form and controller, the storage and tab
//! messaging contracts, and the page injection logic. The `prompt-stash-web`
//! crate binds these to `chrome.*` APIs and renders the popup with Leptos.

pub mod config;
pub mod error;
pub mod form;
pub mod injector;
pub mod list;
pub mod message;
pub mod popup;
pub mod store;
pub mod template;

pub use config::Config;
pub use error::{Result, StashError};
pub use form::{EditCursor, FormErrors, TemplateForm};
pub use injector::{inject, Injection, PageDocument, PromptField};
pub use list::TemplateList;
pub use message::{dispatch, send_prompt, OutboundMessage, TabBridge, TabId};
pub use popup::{PopupState, SubmitError};
pub use store::{MemoryStore, PendingSave, TemplateStore};
pub use template::PromptTemplate;
