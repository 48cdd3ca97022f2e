//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use cadastro_core::config::{default_dir, Config};

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode
    #[command(name = "on")]
    On,
    /// Disable demo mode
    #[command(name = "off")]
    Off,
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let dir = default_dir()?;
    // File values only, so env overrides are not written back
    let mut config = Config::load_with_env(&dir, |_| None)?;

    match command {
        Some(DemoCommands::On) => {
            config.demo_mode = true;
            config.save(&dir)?;
            println!("{}", "Demo mode enabled".green());
            println!("Sample customers are kept in memory for each run. Try 'cadastro list'.");
        }
        Some(DemoCommands::Off) => {
            config.demo_mode = false;
            config.save(&dir)?;
            println!("{}", "Demo mode disabled".yellow());
        }
        Some(DemoCommands::Status) | None => {
            let config = Config::load(&dir)?;
            if config.demo_mode {
                println!("Demo mode is {}", "ON".green());
            } else {
                println!("Demo mode is {} (API: {})", "OFF".yellow(), config.api_url);
            }
        }
    }
    Ok(())
}
