//! Dispatching intents to the core and turning results into notices.
//!
//! No error escapes `Shell::handle`: a failed command becomes a notice for
//! the user and the shell keeps going with its state as the core left it.

use contacts_core::{edit, AppState, ContactId, SyncCore, Transport};
use tracing::warn;

use crate::command::{Command, USAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input; show the notice, if any, above the screen.
    Continue(Option<String>),
    Quit,
}

fn notice(text: impl Into<String>) -> Outcome {
    Outcome::Continue(Some(text.into()))
}

pub struct Shell<T> {
    sync: SyncCore<T>,
    state: AppState,
}

impl<T: Transport> Shell<T> {
    pub fn new(sync: SyncCore<T>) -> Self {
        Self {
            sync,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Initial load. A failure is reported and the shell starts empty.
    pub async fn start(&mut self) -> Option<String> {
        match self.sync.refresh(&mut self.state).await {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "initial load failed");
                Some(format!("Could not load contacts: {e}"))
            }
        }
    }

    pub async fn handle(&mut self, command: Command) -> Outcome {
        let result = match command {
            Command::List => return Outcome::Continue(None),
            Command::Help => return notice(USAGE),
            Command::Quit => return Outcome::Quit,
            Command::Draft(field, value) => {
                self.state.set_draft_field(field, value);
                return Outcome::Continue(None);
            }
            Command::Edit(key) => {
                let Some(contact) = self.state.contact_by_key(&key).cloned() else {
                    return notice(format!("No contact with id {key}"));
                };
                edit::open(&mut self.state, &contact);
                return Outcome::Continue(None);
            }
            Command::Close => {
                edit::close(&mut self.state);
                return Outcome::Continue(None);
            }
            Command::Set(field, value) => edit::set_field(&mut self.state, field, value),
            Command::Refresh => self.sync.refresh(&mut self.state).await,
            Command::Add => self.sync.submit_create(&mut self.state).await,
            Command::Save => edit::save(&self.sync, &mut self.state).await,
            Command::Delete(key) => {
                let id = match self.state.contact_by_key(&key) {
                    Some(contact) => contact.id.clone(),
                    None => key.parse::<ContactId>().unwrap_or_else(|never| match never {}),
                };
                self.sync.submit_delete(&mut self.state, &id).await
            }
        };

        match result {
            Ok(()) => Outcome::Continue(None),
            Err(e) => notice(e.to_string()),
        }
    }
}
