//! Schema inference and table DDL.

pub mod ddl;
pub mod infer;

pub use infer::{infer_columns, ColumnDescriptor};
