use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, Contact};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

const ADA: &str = r#"{"name":"Ada","phone":"1","email":"ada@x.com","address":"Addr"}"#;

async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

// --- list ---

#[tokio::test]
async fn list_contacts_empty() {
    let resp = app().oneshot(empty_request("GET", "/contacts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let contacts: Vec<Contact> = body_json(resp).await;
    assert!(contacts.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_contact_returns_201_with_first_id() {
    let resp = app()
        .oneshot(json_request("POST", "/contacts", ADA))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let contact: Contact = body_json(resp).await;
    assert_eq!(contact.id, 1);
    assert_eq!(contact.name, "Ada");
    assert_eq!(contact.address, "Addr");
}

#[tokio::test]
async fn create_contact_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/contacts", r#"{"name":"Ada"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_preserves_creation_order() {
    let app = app();
    for name in ["C", "A", "B"] {
        let body = format!(r#"{{"name":"{name}","phone":"1","email":"x@x.com","address":"Addr"}}"#);
        let resp = send(&app, json_request("POST", "/contacts", &body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let contacts: Vec<Contact> = body_json(send(&app, empty_request("GET", "/contacts")).await).await;
    let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
    let ids: Vec<_> = contacts.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

// --- update ---

#[tokio::test]
async fn update_contact_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/contacts/42", ADA))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_contact_non_numeric_id_returns_404() {
    let resp = app()
        .oneshot(json_request("PUT", "/contacts/not-a-number", ADA))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_contact_path_id_wins_over_body_id() {
    let app = app();
    send(&app, json_request("POST", "/contacts", ADA)).await;

    let resp = send(
        &app,
        json_request(
            "PUT",
            "/contacts/1",
            r#"{"id":99,"name":"Ada","phone":"2","email":"ada@x.com","address":"Addr"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Contact = body_json(resp).await;
    assert_eq!(updated.id, 1);
    assert_eq!(updated.phone, "2");
}

// --- delete ---

#[tokio::test]
async fn delete_contact_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/contacts/42"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_contact_non_numeric_id_returns_404() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/contacts/c-1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let app = app();

    // create
    let resp = send(&app, json_request("POST", "/contacts", ADA)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Contact = body_json(resp).await;
    let id = created.id;

    // list — should contain the one contact
    let resp = send(&app, empty_request("GET", "/contacts")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let contacts: Vec<Contact> = body_json(resp).await;
    assert_eq!(contacts, vec![created.clone()]);

    // update — full replacement
    let resp = send(
        &app,
        json_request(
            "PUT",
            &format!("/contacts/{id}"),
            r#"{"name":"Ada L","phone":"9","email":"al@x.com","address":"Elsewhere"}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Contact = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Ada L");
    assert_eq!(updated.address, "Elsewhere");

    // delete
    let resp = send(&app, empty_request("DELETE", &format!("/contacts/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // delete again — 404
    let resp = send(&app, empty_request("DELETE", &format!("/contacts/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list — empty again
    let contacts: Vec<Contact> = body_json(send(&app, empty_request("GET", "/contacts")).await).await;
    assert!(contacts.is_empty());

    // ids are never reused
    let recreated: Contact = body_json(send(&app, json_request("POST", "/contacts", ADA)).await).await;
    assert_eq!(recreated.id, id + 1);
}
