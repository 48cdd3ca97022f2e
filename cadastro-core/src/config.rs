//! Configuration management
//!
//! Settings live in `settings.json` inside the cadastro directory:
//! ```json
//! {
//!   "api": { "baseUrl": "http://localhost:3000", "timeoutSecs": 30 },
//!   "app": { "demoMode": false }
//! }
//! ```
//! Keys this crate does not manage are preserved when saving.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::adapters::http::DEFAULT_TIMEOUT_SECS;
use crate::domain::result::{Error, Result};

/// Base URL used when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Overrides the configured API base URL
pub const API_URL_ENV: &str = "CADASTRO_API_URL";

/// Overrides the configured demo mode flag
pub const DEMO_MODE_ENV: &str = "CADASTRO_DEMO_MODE";

/// Overrides the cadastro directory
pub const DIR_ENV: &str = "CADASTRO_DIR";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api: ApiSettings,
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Cadastro configuration (resolved view of settings and environment)
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout_secs: u64,
    pub demo_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            demo_mode: false,
        }
    }
}

impl Config {
    /// Load config from the cadastro directory
    ///
    /// A missing file gives defaults. `CADASTRO_API_URL` and
    /// `CADASTRO_DEMO_MODE` take precedence over the file.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_with_env(dir, |name| std::env::var(name).ok())
    }

    /// Like [`load`](Self::load), reading overrides through `env`
    pub fn load_with_env(dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = read_settings(dir)?;

        let api_url = env(API_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .or(raw.api.base_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let demo_mode = env(DEMO_MODE_ENV)
            .and_then(|v| parse_bool(&v))
            .unwrap_or(raw.app.demo_mode);

        Ok(Self {
            api_url,
            timeout_secs: raw.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            demo_mode,
        })
    }

    /// Save config to the cadastro directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, dir: &Path) -> Result<()> {
        let mut settings = read_settings(dir)?;

        settings.api.base_url = Some(self.api_url.clone());
        settings.api.timeout_secs = Some(self.timeout_secs);
        settings.app.demo_mode = self.demo_mode;

        std::fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }
}

/// Cadastro directory: `CADASTRO_DIR`, else `~/.cadastro`
pub fn default_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".cadastro"))
        .ok_or_else(|| Error::Config("Could not find home directory".to_string()))
}

fn read_settings(dir: &Path) -> Result<SettingsFile> {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid {}: {}", path.display(), e)))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" | "TRUE" | "YES" => Some(true),
        "false" | "0" | "no" | "FALSE" | "NO" => Some(false),
        _ => None,
    }
}
