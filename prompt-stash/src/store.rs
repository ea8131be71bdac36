//! Template persistence contract.
//!
//! The whole list is the unit of persistence: every list mutation hands back
//! a [`PendingSave`] holding a full snapshot, and committing it overwrites
//! whatever the store held before.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{error, info};

use crate::error::Result;
use crate::list::TemplateList;
use crate::template::PromptTemplate;

/// A key-value backed store for the template list.
///
/// Implementations run on the browser event loop, so the futures are not
/// required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait TemplateStore {
    /// Read the stored list. `Ok(None)` means the entry has never been written.
    async fn load(&self) -> Result<Option<Vec<PromptTemplate>>>;

    /// Overwrite the stored list.
    async fn save(&self, items: &[PromptTemplate]) -> Result<()>;
}

/// Snapshot of the list taken right after a mutation.
#[must_use = "a list change is only persisted once the save is committed"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    items: Vec<PromptTemplate>,
}

impl PendingSave {
    pub fn of(list: &TemplateList) -> Self {
        Self {
            items: list.to_vec(),
        }
    }

    pub fn items(&self) -> &[PromptTemplate] {
        &self.items
    }

    /// Write the snapshot. Failures are logged and returned; the in-memory
    /// list stays authoritative until a later save succeeds.
    pub async fn commit<S: TemplateStore>(self, store: &S) -> Result<()> {
        match store.save(&self.items).await {
            Ok(()) => {
                info!(count = self.items.len(), "saved");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, count = self.items.len(), "Failed to save templates");
                Err(e)
            }
        }
    }
}

/// In-memory store. Clones share the same backing entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entry: Rc<RefCell<Option<Vec<PromptTemplate>>>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose entry has already been written.
    pub fn with_items(items: Vec<PromptTemplate>) -> Self {
        let store = Self::new();
        store.entry.replace(Some(items));
        store
    }

    /// Current contents of the entry.
    pub fn snapshot(&self) -> Option<Vec<PromptTemplate>> {
        self.entry.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl TemplateStore for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<PromptTemplate>>> {
        Ok(self.snapshot())
    }

    async fn save(&self, items: &[PromptTemplate]) -> Result<()> {
        self.entry.replace(Some(items.to_vec()));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
