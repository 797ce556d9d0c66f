//! Percolate SQL - load records into in-memory SQL tables.
//!
//! Turns batches of loosely-shaped records (field name to scalar value) into
//! temporary SQLite tables and runs raw SQL against them:
//! - Schema inference with nullability and type-conflict detection
//! - Drop/create/insert as one committed load
//! - Raw query pass-through
//!
//! Can be used as:
//! - Standalone Rust library (default)
//! - Python extension (`--features python`, maturin develop)

pub mod config;
pub mod context;
pub mod schema;
pub mod telemetry;
pub mod types;

#[cfg(feature = "python")]
pub mod bindings;

pub use config::{LogConfig, LogFormat};
pub use context::SqlContext;
pub use schema::{infer_columns, ColumnDescriptor};
pub use types::{PrimitiveKind, Record, Result, SqlError, Value};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// PyO3 module definition for Python integration.
///
/// Exposes `SQLContext` as the `_rust` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(py: Python, m: &PyModule) -> PyResult<()> {
    bindings::register_module(py, m)?;
    Ok(())
}
