//! Add command - register a new customer

use std::process::exit;

use anyhow::Result;
use dialoguer::Input;

use cadastro_core::Field;

use super::{get_context, submit_and_report, FieldArgs};

fn prompt_missing(fields: &mut FieldArgs) -> Result<()> {
    for field in Field::ALL {
        if fields.get(field).is_some() {
            continue;
        }
        let value: String = Input::new()
            .with_prompt(field.placeholder())
            .interact_text()?;
        match field {
            Field::Name => fields.name = Some(value),
            Field::Phone => fields.phone = Some(value),
            Field::City => fields.city = Some(value),
            Field::Email => fields.email = Some(value),
        }
    }
    Ok(())
}

pub async fn run(api_url: Option<&str>, mut fields: FieldArgs, json: bool) -> Result<()> {
    let ctx = get_context(api_url)?;

    // Prompt for anything not given as a flag
    prompt_missing(&mut fields)?;

    let mut form = ctx.register_form();
    fields.apply(&mut form);

    if !submit_and_report(&mut form, json).await? {
        exit(1);
    }
    Ok(())
}
