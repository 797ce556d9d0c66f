//! Logging configuration.
//!
//! Sessions are always in-memory and take no settings; the only ambient
//! configuration is how tracing output is filtered and formatted.

use crate::types::{Result, SqlError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default filter directive when nothing is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(SqlError::ConfigError(format!(
                "Unknown log format '{}', expected 'plain' or 'json'",
                other
            ))),
        }
    }
}

/// Tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `"percolate_sql=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Resolve configuration from the environment.
    ///
    /// Filter resolution order:
    /// 1. P8_SQL_LOG environment variable
    /// 2. RUST_LOG environment variable
    /// 3. "info" (default)
    ///
    /// Format comes from P8_SQL_LOG_FORMAT (`plain` or `json`), default plain.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let filter = lookup("P8_SQL_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(default_filter);

        let format = match lookup("P8_SQL_LOG_FORMAT") {
            Some(value) => LogFormat::parse(&value)?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }

    /// Load configuration from a JSON file.
    ///
    /// Missing keys fall back to defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| SqlError::ConfigError(format!("Invalid config: {}", e)))
    }
}
