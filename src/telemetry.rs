//! Tracing setup and database spans.
//!
//! Spans follow the OpenTelemetry database conventions:
//! `db.system.name` is always `"sqlite"`, `db.operation.name` is the
//! operation, and `db.collection.name` is the target table when known.
//!
//! # Example
//!
//! ```rust,ignore
//! use percolate_sql::telemetry::{db_span, init_tracing, DbOperation};
//! use percolate_sql::LogConfig;
//!
//! init_tracing(&LogConfig::from_env()?)?;
//!
//! let span = db_span(DbOperation::Load, Some("articles"));
//! let _guard = span.entered();
//! ```

use crate::config::{LogConfig, LogFormat};
use crate::types::{Result, SqlError};
use tracing::{debug, field, span, Level, Span};
use tracing_subscriber::EnvFilter;

/// Database operation types (maps to `db.operation.name`).
#[derive(Debug, Clone, Copy)]
pub enum DbOperation {
    /// Drop, create and populate a table
    Load,
    /// Raw SQL pass-through
    Query,
}

impl DbOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Query => "query",
        }
    }
}

/// Create a database operation span.
///
/// # Arguments
///
/// * `operation` - Operation type
/// * `collection` - Table name (optional)
pub fn db_span(operation: DbOperation, collection: Option<&str>) -> Span {
    let span_name = match collection {
        Some(coll) => format!("{} {}", operation.as_str(), coll),
        None => operation.as_str().to_string(),
    };

    let span = span!(
        Level::INFO,
        "db",
        otel.name = %span_name,
        otel.kind = "client",
        db.system.name = "sqlite",
        db.operation.name = operation.as_str(),
        db.collection.name = field::Empty,
        db.response.returned_rows = field::Empty,
    );

    if let Some(coll) = collection {
        span.record("db.collection.name", coll);
    }

    span
}

/// Record the number of rows an operation produced or wrote.
pub fn record_rows(span: &Span, rows: usize) {
    span.record("db.response.returned_rows", rows as u64);
}

/// Install a global `fmt` subscriber configured by `config`.
///
/// Safe to call more than once; later calls keep the first subscriber.
///
/// # Errors
///
/// Returns `SqlError::ConfigError` if the filter directive does not parse
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| SqlError::ConfigError(format!("Invalid log filter '{}': {}", config.filter, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format {
        LogFormat::Plain => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    // Already-initialized is not an error for library callers
    if let Err(e) = installed {
        debug!(error = %e, "Tracing subscriber not installed");
    }

    Ok(())
}
