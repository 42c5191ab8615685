//! Client core for the contact manager.
//!
//! # Overview
//! Keeps a local copy of a remote contacts collection consistent across
//! create, update and delete, validates the new-contact draft, and manages
//! the single edit session behind the edit modal.
//!
//! # Design
//! - `ContactClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`.
//! - A `Transport` executes requests; `ReqwestTransport` is the real one.
//! - `SyncCore` re-fetches the whole collection after every successful
//!   mutation instead of patching local state.
//! - All client state lives in an `AppState` owned by the caller.

pub mod client;
pub mod edit;
pub mod error;
pub mod http;
pub mod remote;
pub mod state;
pub mod sync;
pub mod transport;
pub mod types;

pub use client::ContactClient;
pub use edit::EditSession;
pub use error::{SyncError, TransportError, UnknownField, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use remote::RemoteContacts;
pub use state::AppState;
pub use sync::SyncCore;
pub use transport::{ReqwestTransport, Transport};
pub use types::{Contact, ContactFields, ContactId, Draft, Field};
