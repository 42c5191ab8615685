//! Error types for the contacts client.
//!
//! # Design
//! Two failure families reach the caller. `ValidationError` is raised before
//! any request is built and leaves every piece of state untouched.
//! `TransportError` covers everything that can go wrong talking to the
//! server; `NotFound` gets a dedicated variant because an edit or delete
//! against a stale identifier is the common case worth telling apart.
//! `SyncError` is what command handlers return.

use thiserror::Error;

use crate::types::Field;

/// Failures communicating with the contacts resource.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server returned 404: the addressed contact does not exist.
    #[error("contact not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response.
    #[error("connection failed: {0}")]
    Connection(String),
}

/// A create was attempted with one or more empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all fields before adding a contact (missing: {})", join(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

/// Unrecognised field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field `{0}` (expected name, phone, email or address)")]
pub struct UnknownField(pub String);

/// Error returned by synchronization and edit-session commands.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("no contact is being edited")]
    NoActiveSession,
}

fn join(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
