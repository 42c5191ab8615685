//! Keeps the local contact collection equal to the server's.
//!
//! # Design
//! Every successful mutation is followed by a full re-fetch that replaces the
//! collection wholesale. Nothing is patched locally, which is also the only
//! way server-assigned ids reach the client. The mutating call always
//! completes before the re-fetch is issued; when it fails the re-fetch is
//! skipped and the state is left exactly as it was.

use tracing::{info, warn};

use crate::error::{SyncError, ValidationError};
use crate::remote::RemoteContacts;
use crate::state::AppState;
use crate::transport::Transport;
use crate::types::ContactId;

#[derive(Debug, Clone)]
pub struct SyncCore<T> {
    remote: RemoteContacts<T>,
}

impl<T: Transport> SyncCore<T> {
    pub fn new(remote: RemoteContacts<T>) -> Self {
        Self { remote }
    }

    pub fn remote(&self) -> &RemoteContacts<T> {
        &self.remote
    }

    /// Replace the collection with the server's current list.
    pub async fn refresh(&self, state: &mut AppState) -> Result<(), SyncError> {
        let contacts = self.remote.list_contacts().await?;
        info!(count = contacts.len(), "contact collection refreshed");
        state.contacts = contacts;
        Ok(())
    }

    /// Create a contact from the draft, clear the draft, then refresh.
    ///
    /// Rejected without any request when a draft field is empty. Once the
    /// server has accepted the contact the draft is cleared even if the
    /// refresh fails, so a retry cannot create it twice.
    pub async fn submit_create(&self, state: &mut AppState) -> Result<(), SyncError> {
        let missing = state.draft.fields().missing();
        if !missing.is_empty() {
            return Err(ValidationError { missing }.into());
        }

        if let Err(e) = self.remote.create_contact(state.draft.fields()).await {
            warn!(error = %e, "create failed; collection left unchanged");
            return Err(e.into());
        }
        info!(name = %state.draft.fields().name, "contact created");

        state.draft.clear();
        self.refresh(state).await
    }

    /// Delete a contact, then refresh. There is no confirmation step.
    pub async fn submit_delete(&self, state: &mut AppState, id: &ContactId) -> Result<(), SyncError> {
        if let Err(e) = self.remote.delete_contact(id).await {
            warn!(%id, error = %e, "delete failed; collection left unchanged");
            return Err(e.into());
        }
        info!(%id, "contact deleted");

        self.refresh(state).await
    }

    /// Persist the active edit session, close it, then refresh.
    ///
    /// If the update fails the session stays open with its edits intact. Once
    /// the update is accepted the session is closed whether or not the
    /// refresh succeeds.
    pub async fn submit_update(&self, state: &mut AppState) -> Result<(), SyncError> {
        let session = state.edit.as_ref().ok_or(SyncError::NoActiveSession)?;

        if let Err(e) = self.remote.update_contact(session.id(), session.fields()).await {
            warn!(id = %session.id(), error = %e, "update failed; edit session kept");
            return Err(e.into());
        }
        info!(id = %session.id(), "contact updated");

        state.edit = None;
        self.refresh(state).await
    }
}
