//! Stateless request builder and response parser for the contacts resource.
//!
//! # Design
//! `ContactClient` holds only the base URL. Each of the four collection
//! operations is split into a `build_*` method producing an `HttpRequest`
//! and a `parse_*` method consuming the matching `HttpResponse`; executing
//! the round-trip in between is the `Transport`'s job.

use serde::de::DeserializeOwned;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Contact, ContactFields, ContactId};

const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ContactClient {
    base_url: String,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/contacts", self.base_url)
    }

    fn item_url(&self, id: &ContactId) -> String {
        format!("{}/contacts/{id}", self.base_url)
    }

    pub fn build_list_contacts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: vec![("accept".to_string(), JSON.to_string())],
            body: None,
        }
    }

    /// The body carries the four fields only; the server assigns the id.
    pub fn build_create_contact(&self, fields: &ContactFields) -> Result<HttpRequest, TransportError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: vec![("content-type".to_string(), JSON.to_string())],
            body: Some(to_json(fields)?),
        })
    }

    /// Full replacement: the body is the whole contact, id included.
    pub fn build_update_contact(
        &self,
        id: &ContactId,
        fields: &ContactFields,
    ) -> Result<HttpRequest, TransportError> {
        let contact = Contact {
            id: id.clone(),
            fields: fields.clone(),
        };
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.item_url(id),
            headers: vec![("content-type".to_string(), JSON.to_string())],
            body: Some(to_json(&contact)?),
        })
    }

    pub fn build_delete_contact(&self, id: &ContactId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_contacts(&self, response: HttpResponse) -> Result<Vec<Contact>, TransportError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// Only the status matters: the caller re-fetches the collection to learn
    /// the assigned id, so an empty or non-JSON success body is accepted.
    pub fn parse_create_contact(&self, response: HttpResponse) -> Result<(), TransportError> {
        check_status(&response)
    }

    pub fn parse_update_contact(&self, response: HttpResponse) -> Result<(), TransportError> {
        check_status(&response)
    }

    pub fn parse_delete_contact(&self, response: HttpResponse) -> Result<(), TransportError> {
        check_status(&response)
    }
}

/// Map non-2xx status codes to the appropriate `TransportError` variant.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(TransportError::NotFound);
    }
    Err(TransportError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, TransportError> {
    serde_json::to_string(value).map_err(|e| TransportError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ContactClient {
        ContactClient::new("http://localhost:3000")
    }

    fn fields() -> ContactFields {
        ContactFields {
            name: "A".to_string(),
            phone: "1".to_string(),
            email: "a@x.com".to_string(),
            address: "Addr".to_string(),
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_contacts_produces_correct_request() {
        let req = client().build_list_contacts();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/contacts");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_contact_sends_fields_without_id() {
        let req = client().build_create_contact(&fields()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/contacts");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "A");
        assert_eq!(body["address"], "Addr");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_contact_sends_full_contact() {
        let id = ContactId::Number(3);
        let req = client().build_update_contact(&id, &fields()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/contacts/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 3);
        assert_eq!(body["phone"], "1");
        assert_eq!(body["email"], "a@x.com");
    }

    #[test]
    fn build_delete_contact_addresses_item() {
        let id = ContactId::Text("abc".to_string());
        let req = client().build_delete_contact(&id);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/contacts/abc");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_contacts_preserves_order() {
        let body = r#"[
            {"id":2,"name":"B","phone":"2","email":"b@x.com","address":"Bdr"},
            {"id":1,"name":"A","phone":"1","email":"a@x.com","address":"Addr"}
        ]"#;
        let contacts = client().parse_list_contacts(response(200, body)).unwrap();
        let ids: Vec<_> = contacts.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![ContactId::Number(2), ContactId::Number(1)]);
    }

    #[test]
    fn parse_list_contacts_bad_json() {
        let err = client().parse_list_contacts(response(200, "not json")).unwrap_err();
        assert!(matches!(err, TransportError::Deserialization(_)));
    }

    #[test]
    fn parse_list_contacts_rejects_empty_id() {
        let body = r#"[{"id":"","name":"A","phone":"1","email":"a@x.com","address":"Addr"}]"#;
        let err = client().parse_list_contacts(response(200, body)).unwrap_err();
        assert!(matches!(err, TransportError::Deserialization(_)));
    }

    #[test]
    fn parse_create_contact_accepts_any_success() {
        assert!(client().parse_create_contact(response(201, "{}")).is_ok());
        assert!(client().parse_create_contact(response(200, "")).is_ok());
    }

    #[test]
    fn parse_create_contact_wrong_status() {
        let err = client()
            .parse_create_contact(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, TransportError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_contact_not_found() {
        let err = client().parse_update_contact(response(404, "")).unwrap_err();
        assert!(matches!(err, TransportError::NotFound));
    }

    #[test]
    fn parse_delete_contact_success_and_not_found() {
        assert!(client().parse_delete_contact(response(204, "")).is_ok());
        assert!(client().parse_delete_contact(response(200, "{}")).is_ok());
        let err = client().parse_delete_contact(response(404, "")).unwrap_err();
        assert!(matches!(err, TransportError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ContactClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_contacts().url, "http://localhost:3000/contacts");
    }
}
