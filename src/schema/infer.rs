//! Schema inference from heterogeneous records.
//!
//! Columns come out in order of first appearance across the batch. The first
//! value seen for a field fixes its kind, including `Null`; any later non-null
//! value of another kind is a schema conflict.

use crate::types::{PrimitiveKind, Record, Result, SqlError};
use std::collections::HashMap;
use tracing::{instrument, trace};

/// Inferred column: name, kind and nullability.
///
/// `nullable` is informational. Generated DDL never declares `NOT NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub kind: PrimitiveKind,
    pub nullable: bool,
}

impl ColumnDescriptor {
    /// SQL type keyword for this column.
    pub fn sql_type(&self) -> &'static str {
        self.kind.sql_type()
    }
}

/// Running observation for one field.
struct ColumnStats {
    name: String,
    kind: PrimitiveKind,
    count: usize,
    nullable: bool,
}

/// Infer the column list of a batch of records.
///
/// # Arguments
///
/// * `rows` - Records in load order
///
/// # Returns
///
/// Column descriptors ordered by first appearance
///
/// # Errors
///
/// Returns `SqlError::SchemaConflict` on the first non-null value whose kind
/// differs from the kind recorded for its field
///
/// # Example
///
/// ```rust,ignore
/// let rows = vec![
///     Record::new().with("a", 1).with("b", "x"),
///     Record::new().with("a", 2),
/// ];
/// let columns = infer_columns(&rows)?;
/// // [("a", INTEGER, not null), ("b", TEXT, nullable)]
/// ```
#[instrument(level = "debug", skip_all, fields(rows = rows.len()))]
pub fn infer_columns(rows: &[Record]) -> Result<Vec<ColumnDescriptor>> {
    let mut columns: Vec<ColumnStats> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        for (field, value) in row.iter() {
            let kind = value.kind();

            match index.get(field) {
                Some(&i) => {
                    let column = &mut columns[i];
                    if !value.is_null() && column.kind != kind {
                        return Err(SqlError::conflict(field, column.kind, kind));
                    }
                    column.count += 1;
                    column.nullable |= value.is_null();
                }
                None => {
                    trace!(field, %kind, "New column");
                    index.insert(field, columns.len());
                    columns.push(ColumnStats {
                        name: field.to_string(),
                        kind,
                        count: 1,
                        nullable: value.is_null(),
                    });
                }
            }
        }
    }

    // Records that never mention a field supply null for it
    Ok(columns
        .into_iter()
        .map(|c| ColumnDescriptor {
            nullable: c.nullable || c.count < rows.len(),
            name: c.name,
            kind: c.kind,
        })
        .collect())
}
