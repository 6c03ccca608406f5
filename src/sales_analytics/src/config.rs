//! Runtime configuration: TOML file plus environment.
//!
//! ```toml
//! database_url = "sales.db"     # optional; DATABASE_URL is the fallback
//!
//! [ranges]
//! boundary = "exclusive"        # or "contiguous"
//! ```
//!
//! Entrypoints:
//! - Parse from a TOML string: [`load_config_str`]
//! - Parse from a file path: [`load_config_path`]
//! - Resolve the database URL with flag/file/env precedence: [`AnalyticsConfig::database_url`]

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analytics::BandBoundaryPolicy;

/// Environment variable consulted when no database URL is configured.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Errors related to application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Reads an environment variable, returning a structured error if it's missing.
pub fn get_env_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// SQLite path or `sqlite:` URL.
    pub database_url: Option<String>,
    /// Price band options.
    #[serde(default)]
    pub ranges: RangesCfg,
}

/// `[ranges]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RangesCfg {
    /// Boundary handling for the price histogram.
    #[serde(default)]
    pub boundary: BandBoundaryPolicy,
}

impl AnalyticsConfig {
    /// Resolve the database URL: explicit override, then the file, then `DATABASE_URL`.
    pub fn database_url(&self, cli_override: Option<&str>) -> Result<String, ConfigError> {
        if let Some(url) = cli_override {
            return Ok(url.to_string());
        }
        if let Some(url) = self.database_url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Ok(url.to_string());
        }
        get_env_var(DATABASE_URL_ENV)
    }
}

/// Parse a configuration from a TOML string.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<AnalyticsConfig> {
    toml::from_str(toml_str).context("failed to parse analytics config TOML")
}

/// Read a configuration TOML file from disk and parse it.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<AnalyticsConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}
