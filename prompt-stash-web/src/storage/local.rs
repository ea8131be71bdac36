//! `localStorage` backend for running the popup outside an extension.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use prompt_stash::{PromptTemplate, Result, StashError, TemplateStore};

#[derive(Debug, Clone)]
pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl TemplateStore for LocalStore {
    async fn load(&self) -> Result<Option<Vec<PromptTemplate>>> {
        match LocalStorage::get(&self.key) {
            Ok(items) => Ok(Some(items)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => Err(StashError::Serialization(e.to_string())),
            Err(e) => Err(StashError::Storage(e.to_string())),
        }
    }

    async fn save(&self, items: &[PromptTemplate]) -> Result<()> {
        LocalStorage::set(&self.key, items).map_err(|e| StashError::Storage(e.to_string()))
    }
}
