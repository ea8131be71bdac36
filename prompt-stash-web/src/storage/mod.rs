//! Template list storage backends.

pub mod local;
pub mod sync;

use prompt_stash::{Config, PromptTemplate, Result, TemplateStore};

use crate::chrome;

pub use local::LocalStore;
pub use sync::SyncStore;

/// The store the popup persists to: synced extension storage when running as
/// an extension, page `localStorage` otherwise.
#[derive(Debug, Clone)]
pub enum BrowserStore {
    Sync(SyncStore),
    Local(LocalStore),
}

impl BrowserStore {
    pub fn detect(config: &Config) -> Self {
        if chrome::is_extension() {
            BrowserStore::Sync(SyncStore::new(&config.storage_key))
        } else {
            tracing::warn!("not running as an extension, using localStorage");
            BrowserStore::Local(LocalStore::new(&config.storage_key))
        }
    }
}

impl TemplateStore for BrowserStore {
    async fn load(&self) -> Result<Option<Vec<PromptTemplate>>> {
        match self {
            BrowserStore::Sync(store) => store.load().await,
            BrowserStore::Local(store) => store.load().await,
        }
    }

    async fn save(&self, items: &[PromptTemplate]) -> Result<()> {
        match self {
            BrowserStore::Sync(store) => store.save(items).await,
            BrowserStore::Local(store) => store.save(items).await,
        }
    }
}
