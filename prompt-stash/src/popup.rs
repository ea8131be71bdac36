//! Popup controller: the template list plus the add/edit form.
//!
//! `PopupState` is synchronous and owns all popup session state. Operations
//! that change the list return a [`PendingSave`] for the caller to commit;
//! form edits never do.

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::form::{EditCursor, FormErrors, TemplateForm};
use crate::list::TemplateList;
use crate::message::OutboundMessage;
use crate::store::PendingSave;
use crate::template::PromptTemplate;

/// Why a form submission did not change the list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Storage has not been read yet.
    #[error("templates are still loading")]
    Loading,

    #[error(transparent)]
    Invalid(#[from] FormErrors),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupState {
    config: Config,
    items: TemplateList,
    form: TemplateForm,
    hydrated: bool,
}

impl PopupState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            items: TemplateList::new(),
            form: TemplateForm::default(),
            hydrated: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn items(&self) -> &TemplateList {
        &self.items
    }

    pub fn form(&self) -> &TemplateForm {
        &self.form
    }

    /// Whether the list reflects storage yet. Until then submit and delete
    /// are refused.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Fill the list from storage.
    ///
    /// `None` means the entry was never written: the sample template is
    /// seeded instead (unless disabled). A stored empty list stays empty.
    pub fn hydrate(&mut self, stored: Option<Vec<PromptTemplate>>) -> PendingSave {
        match stored {
            Some(items) => {
                debug!(count = items.len(), "loaded templates");
                self.items.set_state(items);
            }
            None if self.config.seed_sample => {
                debug!("no stored templates, seeding sample");
                self.items.append(PromptTemplate::sample());
            }
            None => {}
        }
        self.hydrated = true;
        PendingSave::of(&self.items)
    }

    /// Storage could not be read. The popup becomes usable with whatever is
    /// in memory, and nothing is written until the user changes the list.
    pub fn hydrate_failed(&mut self) {
        self.hydrated = true;
    }

    pub fn set_title(&mut self, title: String) {
        self.form.set_title(title);
    }

    pub fn set_body(&mut self, body: String) {
        self.form.set_body(body);
    }

    /// Validate the form and add or update the entry it describes.
    ///
    /// On success the form is cleared and returns to "new" mode. On failure
    /// the list is untouched and the errors are also kept on the form.
    pub fn submit(&mut self) -> Result<PendingSave, SubmitError> {
        if !self.hydrated {
            return Err(SubmitError::Loading);
        }
        let template = self.form.validate()?;

        match self.form.cursor {
            EditCursor::New => self.items.append(template),
            EditCursor::Editing(index) => {
                if !self.items.set_item(index, template) {
                    warn!(index, "edited template no longer exists");
                }
            }
        }

        self.form.reset();
        Ok(PendingSave::of(&self.items))
    }

    /// Load entry `index` into the form. Returns false if it does not exist.
    pub fn edit(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(template) => {
                self.form.load(index, template);
                true
            }
            None => false,
        }
    }

    /// Leave edit mode without touching the list.
    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    /// Remove entry `index`.
    ///
    /// The edit cursor keeps pointing at the same template: it is cleared if
    /// that template was removed and shifted down if an earlier one was.
    pub fn delete(&mut self, index: usize) -> Option<PendingSave> {
        if !self.hydrated {
            return None;
        }
        self.items.remove(index)?;

        if let EditCursor::Editing(current) = self.form.cursor {
            if current == index {
                self.form.reset();
            } else if current > index {
                self.form.cursor = EditCursor::Editing(current - 1);
            }
        }

        Some(PendingSave::of(&self.items))
    }

    /// Message that sends entry `index` to the page.
    pub fn outbound(&self, index: usize) -> Option<OutboundMessage> {
        self.items
            .get(index)
            .map(|t| OutboundMessage::prompt(&self.config, &t.body))
    }
}
