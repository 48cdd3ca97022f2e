//! Update command - edit an existing customer

use std::process::exit;

use anyhow::{Context, Result};

use super::{get_context, submit_and_report, FieldArgs};

pub async fn run(api_url: Option<&str>, id: &str, fields: FieldArgs, json: bool) -> Result<()> {
    let ctx = get_context(api_url)?;
    let mut form = ctx.register_form();
    form.load().await?;

    form.begin_edit_by_id(id)
        .with_context(|| format!("Cannot edit customer '{}'", id))?;

    // Unset flags keep the record's current values
    fields.apply(&mut form);

    if !submit_and_report(&mut form, json).await? {
        exit(1);
    }
    Ok(())
}
