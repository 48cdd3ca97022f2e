//! List command - load customers and print the table

use anyhow::Result;

use super::get_context;
use crate::output;

pub async fn run(api_url: Option<&str>, json: bool) -> Result<()> {
    let ctx = get_context(api_url)?;
    let mut form = ctx.register_form();
    form.load().await?;

    let view = form.render();
    if json {
        println!("{}", serde_json::to_string_pretty(&view.rows)?);
        return Ok(());
    }

    output::print_customers(&view);
    Ok(())
}
