//! Terminal front end for the contact manager.
//!
//! Each input line is one user intent (`command`). `Shell` forwards it to
//! the core and `view` renders the resulting state: the new-contact form,
//! the contact list and, while a contact is being edited, the edit modal.

pub mod command;
pub mod shell;
pub mod view;

pub use command::{Command, CommandError};
pub use shell::{Outcome, Shell};
