//! Register service - the customer form and its table
//!
//! `RegisterForm` owns the in-memory collection, the four form inputs and
//! the create/edit mode. Remote calls go through the [`CustomerApi`] port;
//! local state only changes after a call succeeds.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::result::{Error, Result};
use crate::domain::{Customer, Field, FormFields, FormMode};
use crate::ports::CustomerApi;

/// Table column headers
pub const TABLE_HEADERS: [&str; 5] = ["Nome", "Email", "Número de Celular", "Cidade", "Ações"];

/// What a call to [`RegisterForm::submit`] did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "customer", rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// An input was empty; nothing was sent
    Incomplete,
    /// A new record was created and appended
    Created(Customer),
    /// The record being edited was updated in place
    Updated(Customer),
}

/// One visible table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Target of the row's edit and delete actions
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
}

/// Rendered form and table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub submit_label: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// Customer registration form bound to a remote collection
pub struct RegisterForm {
    api: Arc<dyn CustomerApi>,
    records: Vec<Customer>,
    editing_id: Option<String>,
    fields: FormFields,
}

impl RegisterForm {
    pub fn new(api: Arc<dyn CustomerApi>) -> Self {
        Self {
            api,
            records: Vec::new(),
            editing_id: None,
            fields: FormFields::default(),
        }
    }

    /// Replace the local collection with the remote one
    ///
    /// On failure the current records are kept and the error is returned.
    pub async fn load(&mut self) -> Result<usize> {
        let customers = self.api.list().await.map_err(|e| {
            debug!(backend = self.api.name(), error = %e, "failed to load customers");
            e
        })?;
        self.records = customers;
        info!(count = self.records.len(), "customers loaded");
        Ok(self.records.len())
    }

    /// Send the form
    ///
    /// Aborts without a network call when any input is empty. In edit mode
    /// the edited record is updated and replaced in place, then the form
    /// returns to create mode; otherwise the server's created record is
    /// appended. Inputs are cleared only after a successful call.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        if !self.fields.is_complete() {
            debug!(missing = ?self.fields.missing(), "submit skipped, form incomplete");
            return Ok(SubmitOutcome::Incomplete);
        }

        let outcome = match self.editing_id.clone() {
            Some(id) => {
                let values = self.fields.to_new_customer();
                let updated = match self.records.iter().find(|r| r.id == id) {
                    Some(existing) => existing.with_values(values),
                    None => Customer::from_new(id.clone(), values),
                };
                self.api.update(&updated).await?;

                for record in self.records.iter_mut().filter(|r| r.id == id) {
                    *record = updated.clone();
                }
                self.editing_id = None;
                info!(%id, "customer updated");
                SubmitOutcome::Updated(updated)
            }
            None => {
                let created = self.api.create(&self.fields.to_new_customer()).await?;
                self.records.push(created.clone());
                info!(id = %created.id, "customer created");
                SubmitOutcome::Created(created)
            }
        };

        self.fields.clear();
        Ok(outcome)
    }

    /// Switch to edit mode for `record` and pre-fill the inputs
    pub fn begin_edit(&mut self, record: &Customer) {
        self.editing_id = Some(record.id.clone());
        self.fields.fill_from(record);
    }

    /// [`begin_edit`](Self::begin_edit) on the visible record with `id`
    pub fn begin_edit_by_id(&mut self, id: &str) -> Result<()> {
        let record = self
            .records
            .iter()
            .find(|r| r.id == id && r.is_visible())
            .cloned()
            .ok_or_else(|| Error::not_found(format!("customer {}", id)))?;
        self.begin_edit(&record);
        Ok(())
    }

    /// Hide the record with `id` from the table
    ///
    /// Local only: the record stays in memory and on the server. Returns
    /// true if a visible record was hidden by this call.
    pub fn soft_delete(&mut self, id: &str) -> bool {
        let mut hidden = false;
        for record in self.records.iter_mut().filter(|r| r.id == id) {
            hidden |= !record.deleted;
            record.deleted = true;
        }
        if hidden {
            info!(%id, "customer hidden");
        }
        hidden
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn mode(&self) -> FormMode {
        match &self.editing_id {
            Some(id) => FormMode::Edit { id: id.clone() },
            None => FormMode::Create,
        }
    }

    /// Every record, including hidden ones
    pub fn records(&self) -> &[Customer] {
        &self.records
    }

    /// Records shown in the table, in collection order
    pub fn visible_records(&self) -> impl Iterator<Item = &Customer> {
        self.records.iter().filter(|r| r.is_visible())
    }

    pub fn render(&self) -> TableView {
        render(&self.mode(), &self.records)
    }
}

/// Render the form label and the non-deleted rows
pub fn render(mode: &FormMode, records: &[Customer]) -> TableView {
    TableView {
        submit_label: mode.submit_label().to_string(),
        headers: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: records
            .iter()
            .filter(|r| r.is_visible())
            .map(|r| TableRow {
                id: r.id.clone(),
                name: r.name.clone(),
                email: r.email.clone(),
                phone: r.phone.clone(),
                city: r.city.clone(),
            })
            .collect(),
    }
}
