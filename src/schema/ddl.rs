//! SQL statement text for table loads.
//!
//! Identifiers are trusted input and are emitted as given, without quoting.
//! Values never appear in statement text; inserts use `?` placeholders.

use super::infer::ColumnDescriptor;
use crate::types::{Record, Value};

pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {}", table)
}

/// `CREATE TABLE <table> (<col> <TYPE>,...)`, with no constraints.
pub fn create_table(table: &str, columns: &[ColumnDescriptor]) -> String {
    let column_defs: Vec<String> = columns
        .iter()
        .map(|c| format!("{} {}", c.name, c.sql_type()))
        .collect();

    format!("CREATE TABLE {} ({})", table, column_defs.join(","))
}

/// Parameterized insert with one placeholder per column.
pub fn insert_into(table: &str, columns: &[ColumnDescriptor]) -> String {
    let placeholders = vec!["?"; columns.len()].join(",");
    format!("INSERT INTO {} VALUES ({})", table, placeholders)
}

/// Align a record to column order, substituting null for absent fields.
pub fn align_row(record: &Record, columns: &[ColumnDescriptor]) -> Vec<Value> {
    columns
        .iter()
        .map(|c| record.get(&c.name).cloned().unwrap_or(Value::Null))
        .collect()
}
