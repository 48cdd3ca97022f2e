//! Form command - interactive form and table
//!
//! Loads the collection once, then loops: show the table, pick an action.
//! Deleting only hides the row for this session.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;

use cadastro_core::{Field, RegisterForm};

use super::{get_context, prompt_field, submit_and_report};
use crate::output;

enum Action {
    Submit,
    Edit,
    Delete,
    Quit,
}

pub async fn run(api_url: Option<&str>) -> Result<()> {
    if atty::isnt(atty::Stream::Stdin) {
        anyhow::bail!(
            "The interactive form needs a terminal. Use 'cadastro list' or 'cadastro add' instead."
        );
    }

    let ctx = get_context(api_url)?;
    let mut form = ctx.register_form();

    // A failed load leaves the table empty; the form still works
    if let Err(e) = form.load().await {
        output::error(&format!("Could not load customers: {}", e));
    }

    loop {
        let view = form.render();
        println!();
        println!("{}", "Cadastro de Usuários".bold());
        output::print_customers(&view);
        println!();

        let items = [view.submit_label.as_str(), "Edit", "Delete", "Quit"];
        let action = match Select::new().items(&items).default(0).interact()? {
            0 => Action::Submit,
            1 => Action::Edit,
            2 => Action::Delete,
            _ => Action::Quit,
        };

        match action {
            Action::Submit => fill_and_submit(&mut form).await?,
            Action::Edit => {
                if let Some(id) = pick_row(&form, "Edit which customer?")? {
                    form.begin_edit_by_id(&id)?;
                    fill_and_submit(&mut form).await?;
                }
            }
            Action::Delete => {
                if let Some(id) = pick_row(&form, "Delete which customer?")? {
                    form.soft_delete(&id);
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Prompt the four inputs and submit; API errors are shown, not fatal
async fn fill_and_submit(form: &mut RegisterForm) -> Result<()> {
    for field in Field::ALL {
        let value = prompt_field(field, form.fields().get(field))?;
        form.set_field(field, value);
    }

    if let Err(e) = submit_and_report(form, false).await {
        output::error(&format!("{:#}", e));
    }
    Ok(())
}

/// Let the user choose a visible row; None when there is nothing to pick
fn pick_row(form: &RegisterForm, prompt: &str) -> Result<Option<String>> {
    let rows: Vec<(String, String)> = form
        .visible_records()
        .map(|c| (c.id.clone(), format!("{} <{}> - {}", c.name, c.email, c.city)))
        .collect();

    if rows.is_empty() {
        output::info("No customers to choose from");
        return Ok(None);
    }

    let labels: Vec<&str> = rows.iter().map(|(_, label)| label.as_str()).collect();
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|i| rows[i].0.clone()))
}
