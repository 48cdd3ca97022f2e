//! CLI command implementations

pub mod add;
pub mod demo;
pub mod form;
pub mod list;
pub mod update;

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Input;

use cadastro_core::config::default_dir;
use cadastro_core::{CadastroContext, Field, OperationResult, RegisterForm, SubmitOutcome};

use crate::output;

/// The four form inputs as flags
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,
    /// Email address
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// City
    #[arg(long)]
    pub city: Option<String>,
}

impl FieldArgs {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::City => self.city.as_deref(),
            Field::Email => self.email.as_deref(),
        }
    }

    /// Copy the given flags into the form, leaving other inputs alone
    pub fn apply(&self, form: &mut RegisterForm) {
        for field in Field::ALL {
            if let Some(value) = self.get(field) {
                form.set_field(field, value);
            }
        }
    }
}

/// Get the cadastro context for this invocation
pub fn get_context(api_url: Option<&str>) -> Result<CadastroContext> {
    let dir = default_dir()?;
    tracing::debug!(dir = %dir.display(), "using cadastro directory");
    CadastroContext::new(&dir, api_url).context("Failed to initialize cadastro context")
}

/// Prompt for one input, starting from its current value
pub fn prompt_field(field: Field, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(field.placeholder())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Submit the form and report the result
///
/// Returns true when something was created or updated.
pub async fn submit_and_report(form: &mut RegisterForm, json: bool) -> Result<bool> {
    let result = form.submit().await;

    if json {
        let envelope: OperationResult<SubmitOutcome> = match result {
            Ok(SubmitOutcome::Incomplete) => OperationResult::fail(incomplete_message(form)),
            other => other.into(),
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(envelope.success);
    }

    match result? {
        SubmitOutcome::Incomplete => {
            output::warning(&incomplete_message(form));
            Ok(false)
        }
        SubmitOutcome::Created(customer) => {
            output::success(&format!("Customer registered (id {})", customer.id));
            Ok(true)
        }
        SubmitOutcome::Updated(customer) => {
            output::success(&format!("Customer {} updated", customer.id));
            Ok(true)
        }
    }
}

fn incomplete_message(form: &RegisterForm) -> String {
    let missing: Vec<&str> = form
        .fields()
        .missing()
        .into_iter()
        .map(field_name)
        .collect();
    format!("All fields are required. Missing: {}", missing.join(", "))
}

pub fn field_name(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Phone => "phone",
        Field::City => "city",
        Field::Email => "email",
    }
}
