//! Error types for SQL context operations.
//!
//! Uses `thiserror` for ergonomic error definitions with automatic `From` implementations.

use super::value::PrimitiveKind;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SqlError>;

/// Error type for schema inference, table loading and queries.
#[derive(Error, Debug)]
pub enum SqlError {
    /// One column received non-null values of more than one primitive kind.
    ///
    /// Raised during inference, before any statement reaches the backend.
    #[error(
        "Multiple types for one column is not allowed in SQL: column '{column}' has {first} and {second}"
    )]
    SchemaConflict {
        column: String,
        first: PrimitiveKind,
        second: PrimitiveKind,
    },

    /// Backend error (SQLite), passed through untouched
    #[error(transparent)]
    Backend(#[from] rusqlite::Error),

    /// Input value outside the supported primitive kinds
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SqlError {
    /// Create a schema conflict for `column`.
    ///
    /// # Arguments
    ///
    /// * `column` - Offending field name
    /// * `first` - Kind recorded at first appearance
    /// * `second` - Conflicting kind seen later
    pub fn conflict(column: impl Into<String>, first: PrimitiveKind, second: PrimitiveKind) -> Self {
        Self::SchemaConflict {
            column: column.into(),
            first,
            second,
        }
    }

    /// Create an unsupported value error with context.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedValue(msg.into())
    }

    /// Check if the error came from schema inference.
    pub fn is_schema_conflict(&self) -> bool {
        matches!(self, Self::SchemaConflict { .. })
    }
}
