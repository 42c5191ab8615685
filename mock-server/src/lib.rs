use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Body of POST and PUT. An `id` in a PUT body is ignored; the path wins.
#[derive(Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Contacts in creation order plus the next id to hand out.
#[derive(Debug)]
pub struct Store {
    next_id: u64,
    contacts: Vec<Contact>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            contacts: Vec::new(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/{id}", put(update_contact).delete(delete_contact))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Ids are integers; any other path segment names a contact that cannot exist.
fn parse_id(raw: &str) -> Result<u64, StatusCode> {
    raw.parse().map_err(|_| StatusCode::NOT_FOUND)
}

async fn list_contacts(State(db): State<Db>) -> Json<Vec<Contact>> {
    Json(db.read().await.contacts.clone())
}

async fn create_contact(
    State(db): State<Db>,
    Json(input): Json<ContactInput>,
) -> (StatusCode, Json<Contact>) {
    let mut store = db.write().await;
    let contact = Contact {
        id: store.next_id,
        name: input.name,
        phone: input.phone,
        email: input.email,
        address: input.address,
    };
    store.next_id += 1;
    store.contacts.push(contact.clone());
    info!(id = contact.id, "contact created");
    (StatusCode::CREATED, Json(contact))
}

async fn update_contact(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Contact>, StatusCode> {
    let id = parse_id(&id)?;
    let mut store = db.write().await;
    let contact = store
        .contacts
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    contact.name = input.name;
    contact.phone = input.phone;
    contact.email = input.email;
    contact.address = input.address;
    info!(id, "contact updated");
    Ok(Json(contact.clone()))
}

async fn delete_contact(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let id = parse_id(&id)?;
    let mut store = db.write().await;
    let index = store
        .contacts
        .iter()
        .position(|c| c.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    store.contacts.remove(index);
    info!(id, "contact deleted");
    Ok(StatusCode::NO_CONTENT)
}
