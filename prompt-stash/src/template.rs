//! The stored prompt template record.

use serde::{Deserialize, Serialize};

pub const SAMPLE_TITLE: &str = "IT英語に翻訳";
pub const SAMPLE_BODY: &str =
    "あなたは翻訳家です。入力された日本語をIT業界に特化した英語に翻訳をしてください。";

/// A saved prompt: a label shown in the popup list and the text sent to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub title: String,
    pub body: String,
}

impl PromptTemplate {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The example template seeded on first run.
    pub fn sample() -> Self {
        Self::new(SAMPLE_TITLE, SAMPLE_BODY)
    }
}
