//! The four collection operations as async calls.

use tracing::debug;

use crate::client::ContactClient;
use crate::error::TransportError;
use crate::transport::Transport;
use crate::types::{Contact, ContactFields, ContactId};

/// A `ContactClient` paired with the `Transport` that executes its requests.
#[derive(Debug, Clone)]
pub struct RemoteContacts<T> {
    client: ContactClient,
    transport: T,
}

impl<T: Transport> RemoteContacts<T> {
    pub fn new(client: ContactClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, TransportError> {
        let request = self.client.build_list_contacts();
        debug!(url = %request.url, "listing contacts");
        let response = self.transport.execute(request).await?;
        self.client.parse_list_contacts(response)
    }

    pub async fn create_contact(&self, fields: &ContactFields) -> Result<(), TransportError> {
        let request = self.client.build_create_contact(fields)?;
        debug!(url = %request.url, "creating contact");
        let response = self.transport.execute(request).await?;
        self.client.parse_create_contact(response)
    }

    pub async fn update_contact(
        &self,
        id: &ContactId,
        fields: &ContactFields,
    ) -> Result<(), TransportError> {
        let request = self.client.build_update_contact(id, fields)?;
        debug!(url = %request.url, "updating contact");
        let response = self.transport.execute(request).await?;
        self.client.parse_update_contact(response)
    }

    pub async fn delete_contact(&self, id: &ContactId) -> Result<(), TransportError> {
        let request = self.client.build_delete_contact(id);
        debug!(url = %request.url, "deleting contact");
        let response = self.transport.execute(request).await?;
        self.client.parse_delete_contact(response)
    }
}
