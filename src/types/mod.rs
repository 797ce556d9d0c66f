//! Core data types.
//!
//! - `Value` / `PrimitiveKind`: scalar values and their kinds
//! - `Record`: one input row, fields in insertion order
//! - `SqlError`: error type for all operations
//! - `Result`: convenient result type alias

pub mod error;
pub mod record;
pub mod value;

pub use error::{Result, SqlError};
pub use record::Record;
pub use value::{PrimitiveKind, Value};
