//! Error types for prompt-stash operations.

use thiserror::Error;

/// Result type for prompt-stash operations.
pub type Result<T> = std::result::Result<T, StashError>;

/// Errors that can occur while persisting templates or delivering prompts.
///
/// None of these are fatal: callers log them and carry on with the
/// in-memory state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StashError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Could not find current tab")]
    NoActiveTab,

    #[error("Message delivery failed: {0}")]
    Delivery(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for StashError {
    fn from(e: serde_json::Error) -> Self {
        StashError::Serialization(e.to_string())
    }
}
