//! Form state: the four inputs and the create/edit mode

use serde::{Deserialize, Serialize};

use super::customer::{Customer, NewCustomer};

/// One of the four form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    City,
    Email,
}

impl Field {
    /// Inputs in the order the form shows them
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::City, Field::Email];

    /// Input placeholder text
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Digite seu nome completo",
            Field::Phone => "Digite seu número de telefone",
            Field::City => "Digite sua cidade",
            Field::Email => "Digite seu email",
        }
    }
}

/// The text inputs, read at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub email: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::City => &self.city,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::City => self.city = value,
            Field::Email => self.email = value,
        }
    }

    /// True when every input has a value
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    /// Inputs that are still empty
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Pre-fill from an existing record
    pub fn fill_from(&mut self, customer: &Customer) {
        self.name = customer.name.clone();
        self.phone = customer.phone.clone();
        self.city = customer.city.clone();
        self.email = customer.email.clone();
    }

    pub fn to_new_customer(&self) -> NewCustomer {
        NewCustomer {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
        }
    }
}

/// Create mode or edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    /// Submit button label
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Cadastrar",
            FormMode::Edit { .. } => "Atualizar",
        }
    }
}
