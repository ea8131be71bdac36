//! Add/edit form state for the popup.

use thiserror::Error;

use crate::template::PromptTemplate;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const BODY_REQUIRED: &str = "Template is required";

/// Which list entry, if any, the form is editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditCursor {
    #[default]
    New,
    Editing(usize),
}

impl EditCursor {
    pub fn index(self) -> Option<usize> {
        match self {
            EditCursor::New => None,
            EditCursor::Editing(index) => Some(index),
        }
    }

    pub fn is_new(self) -> bool {
        matches!(self, EditCursor::New)
    }
}

/// Inline validation messages, one slot per required field.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("template form is incomplete")]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub body: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateForm {
    pub title: String,
    pub body: String,
    pub cursor: EditCursor,
    errors: FormErrors,
}

impl TemplateForm {
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.errors.title = None;
    }

    pub fn set_body(&mut self, body: String) {
        self.body = body;
        self.errors.body = None;
    }

    /// Check both fields and build the record to store.
    ///
    /// Whitespace-only input counts as empty. The stored text is kept exactly
    /// as typed.
    pub fn validate(&mut self) -> Result<PromptTemplate, FormErrors> {
        let errors = FormErrors {
            title: self.title.trim().is_empty().then_some(TITLE_REQUIRED),
            body: self.body.trim().is_empty().then_some(BODY_REQUIRED),
        };
        self.errors = errors.clone();

        if errors.is_empty() {
            Ok(PromptTemplate::new(self.title.clone(), self.body.clone()))
        } else {
            Err(errors)
        }
    }

    /// Fill the form from an existing entry and point the cursor at it.
    pub fn load(&mut self, index: usize, template: &PromptTemplate) {
        self.title = template.title.clone();
        self.body = template.body.clone();
        self.cursor = EditCursor::Editing(index);
        self.errors = FormErrors::default();
    }

    /// Text of the submit button for the current mode.
    pub fn submit_label(&self) -> &'static str {
        if self.cursor.is_new() {
            "Add"
        } else {
            "Update"
        }
    }

    /// Clear the fields and go back to "new" mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
