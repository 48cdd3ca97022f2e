//! Cadastro CLI - customer registration in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, demo, form, list, update};

/// Cadastro - register customers against a clientes REST API
#[derive(Parser)]
#[command(name = "cadastro", version, about, long_about = None)]
struct Cli {
    /// Base URL of the clientes API (overrides settings and CADASTRO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive form and table (default)
    Form,

    /// Load customers and print the table
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new customer
    Add {
        #[command(flatten)]
        fields: commands::FieldArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update an existing customer
    Update {
        /// Customer ID
        id: String,
        #[command(flatten)]
        fields: commands::FieldArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode (in-memory sample customers)
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    cadastro_core::logging::init_tracing(cadastro_core::logging::DEFAULT_FILTER);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let api_url = cli.api_url.as_deref();
    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => form::run(api_url).await,
        Commands::List { json } => list::run(api_url, json).await,
        Commands::Add { fields, json } => add::run(api_url, fields, json).await,
        Commands::Update { id, fields, json } => update::run(api_url, &id, fields, json).await,
        Commands::Demo { command } => demo::run(command),
    }
}
