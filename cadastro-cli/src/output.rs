//! Output formatting utilities

use cadastro_core::TableView;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Build the customer table; the actions column shows the row id
pub fn customer_table(view: &TableView) -> Table {
    let mut table = create_table();
    table.set_header(&view.headers);
    for row in &view.rows {
        table.add_row(vec![
            row.name.as_str(),
            row.email.as_str(),
            row.phone.as_str(),
            row.city.as_str(),
            row.id.as_str(),
        ]);
    }
    table
}

/// Print the customer table, or a note when it is empty
pub fn print_customers(view: &TableView) {
    if view.rows.is_empty() {
        info("No customers to show");
        return;
    }
    println!("{}", customer_table(view));
    println!("{} customer(s)", view.rows.len());
}
