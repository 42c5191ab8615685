//! Domain types for the contacts API.
//!
//! # Design
//! `ContactFields` is the four-string payload shared by every shape a contact
//! takes on the client: the creation `Draft`, the shadow copy held by an edit
//! session, and the persisted `Contact`. Only `Contact` carries an identifier;
//! identifiers are assigned by the server and never invented locally.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::UnknownField;

/// Server-assigned identifier of a persisted contact.
///
/// Servers in the wild hand out either integers or strings, so both are
/// accepted and written back in the representation they arrived in. An
/// empty string is rejected: it would address the collection, not an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ContactId {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(ContactId::Number(n)),
            RawId::Text(s) if s.is_empty() => Err(de::Error::custom("contact id must not be empty")),
            RawId::Text(s) => Ok(ContactId::Text(s)),
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactId::Number(n) => write!(f, "{n}"),
            ContactId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for ContactId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => ContactId::Number(n),
            Err(_) => ContactId::Text(s.to_string()),
        })
    }
}

/// One of the four editable text fields of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Address];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// The free-text attributes of a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Fields that are empty strings, in form order. Whitespace counts as
    /// content.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

/// A persisted contact as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    #[serde(flatten)]
    pub fields: ContactFields,
}

/// The new-contact form. Has no identifier until the server assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    fields: ContactFields,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn clear(&mut self) {
        self.fields = ContactFields::default();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.missing().len() == Field::ALL.len()
    }
}
