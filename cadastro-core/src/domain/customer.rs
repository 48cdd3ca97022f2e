//! Customer domain model
//!
//! Field names on the wire follow the clientes API (`nome`, `telefone`,
//! `cidade`); the Rust side uses English names.

use serde::{Deserialize, Serialize};

/// A registered customer as returned by the clientes API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CustomerWire", into = "CustomerWire")]
pub struct Customer {
    /// Server-assigned identifier
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    /// Hidden from the table by a local delete. Never sent to the API.
    pub deleted: bool,
    /// The API sent the id as a JSON number; it is written back as one
    numeric_id: bool,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            city: city.into(),
            deleted: false,
            numeric_id: false,
        }
    }

    /// Build the full record for an update of `id`
    pub fn from_new(id: impl Into<String>, new: NewCustomer) -> Self {
        Self::new(id, new.name, new.email, new.phone, new.city)
    }

    /// This record's id with new field values, visible again
    pub fn with_values(&self, new: NewCustomer) -> Self {
        Self {
            numeric_id: self.numeric_id,
            ..Self::from_new(self.id.clone(), new)
        }
    }

    /// Whether the record should appear in the table
    pub fn is_visible(&self) -> bool {
        !self.deleted
    }

    pub fn has_numeric_id(&self) -> bool {
        self.numeric_id
    }
}

/// Create payload: a customer without an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "cidade")]
    pub city: String,
}

/// Customer as it travels over the wire
#[derive(Serialize, Deserialize)]
struct CustomerWire {
    id: WireId,
    #[serde(rename = "nome", default, deserialize_with = "null_as_empty")]
    name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    email: String,
    #[serde(rename = "telefone", default, deserialize_with = "null_as_empty")]
    phone: String,
    #[serde(rename = "cidade", default, deserialize_with = "null_as_empty")]
    city: String,
}

/// ID that can be number or string
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(serde_json::Number),
    Text(String),
}

impl From<CustomerWire> for Customer {
    fn from(wire: CustomerWire) -> Self {
        let (id, numeric_id) = match wire.id {
            WireId::Number(n) => (n.to_string(), true),
            WireId::Text(s) => (s, false),
        };
        Self {
            numeric_id,
            ..Self::new(id, wire.name, wire.email, wire.phone, wire.city)
        }
    }
}

impl From<Customer> for CustomerWire {
    fn from(customer: Customer) -> Self {
        let id = match customer.id.parse::<serde_json::Number>() {
            Ok(n) if customer.numeric_id => WireId::Number(n),
            _ => WireId::Text(customer.id),
        };
        Self {
            id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            city: customer.city,
        }
    }
}

/// Treat a `null` text field as empty
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
