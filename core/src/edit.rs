//! The single optional edit session behind the edit modal.
//!
//! A session exists iff the modal is visible. Opening replaces whatever
//! session was active; closing discards unsaved edits; saving goes through
//! `SyncCore::submit_update`.

use tracing::debug;

use crate::error::SyncError;
use crate::state::AppState;
use crate::sync::SyncCore;
use crate::transport::Transport;
use crate::types::{Contact, ContactFields, ContactId, Field};

/// Shadow copy of one contact's fields while it is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    id: ContactId,
    fields: ContactFields,
}

impl EditSession {
    fn seeded_from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            fields: contact.fields.clone(),
        }
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }
}

pub fn open(state: &mut AppState, contact: &Contact) {
    if let Some(previous) = &state.edit {
        debug!(previous = %previous.id, "replacing active edit session");
    }
    debug!(id = %contact.id, "edit session opened");
    state.edit = Some(EditSession::seeded_from(contact));
}

/// Change one field of the shadow copy. The collection is not touched.
pub fn set_field(state: &mut AppState, field: Field, value: impl Into<String>) -> Result<(), SyncError> {
    let session = state.edit.as_mut().ok_or(SyncError::NoActiveSession)?;
    session.fields.set(field, value);
    Ok(())
}

pub fn close(state: &mut AppState) {
    if let Some(session) = state.edit.take() {
        debug!(id = %session.id, "edit session discarded");
    }
}

pub async fn save<T: Transport>(sync: &SyncCore<T>, state: &mut AppState) -> Result<(), SyncError> {
    sync.submit_update(state).await
}
