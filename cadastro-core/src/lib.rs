//! Cadastro Core - customer registration form over a REST collection
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Customer record, form inputs, errors
//! - **ports**: `CustomerApi`, the remote clientes collection
//! - **services**: `RegisterForm`, the form/table state and its operations
//! - **adapters**: HTTP client and in-memory demo backend

pub mod adapters;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use adapters::demo::DemoCustomerApi;
use adapters::http::HttpCustomerApi;
use config::Config;
use ports::CustomerApi;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{Customer, Field, FormFields, FormMode, NewCustomer};
pub use services::{RegisterForm, SubmitOutcome, TableRow, TableView};

/// Main context for Cadastro operations
///
/// Resolves configuration and picks the backend for the form.
pub struct CadastroContext {
    pub config: Config,
    pub api: Arc<dyn CustomerApi>,
}

impl CadastroContext {
    /// Create a context from the settings in `dir`
    ///
    /// `api_url` overrides the configured base URL.
    pub fn new(dir: &Path, api_url: Option<&str>) -> Result<Self> {
        let mut config = Config::load(dir)?;
        if let Some(url) = api_url {
            config.api_url = url.to_string();
        }
        Self::from_config(config)
    }

    /// Create a context from an already resolved config
    pub fn from_config(config: Config) -> Result<Self> {
        let api: Arc<dyn CustomerApi> = if config.demo_mode {
            tracing::info!("demo mode enabled, using in-memory customers");
            Arc::new(DemoCustomerApi::new())
        } else {
            let http = HttpCustomerApi::with_timeout(&config.api_url, config.timeout_secs)
                .map_err(|e| Error::Config(format!("{:#}", e)))?;
            Arc::new(http)
        };

        Ok(Self { config, api })
    }

    /// A fresh form bound to this context's backend
    pub fn register_form(&self) -> RegisterForm {
        RegisterForm::new(Arc::clone(&self.api))
    }
}
