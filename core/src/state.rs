//! Client-side application state.
//!
//! `AppState` is owned by the host and lent to the core by `&mut`. The
//! collection is written only by `SyncCore`, the edit session only by the
//! `edit` functions, and the draft by the form (field by field) and by
//! `SyncCore` (reset after a successful create).

use crate::edit::EditSession;
use crate::types::{Contact, ContactId, Draft, Field};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) contacts: Vec<Contact>,
    pub(crate) draft: Draft,
    pub(crate) edit: Option<EditSession>,
}

impl AppState {
    /// Empty collection, empty draft, no edit session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection as last confirmed by the server, in server order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    /// Look up a contact by the textual form of its id, as a user would type it.
    pub fn contact_by_key(&self, key: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id.to_string() == key)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_draft_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// True iff the edit modal is visible.
    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }
}
