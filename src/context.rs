//! SQL context: an in-memory SQLite session that loads records into tables.
//!
//! This is the main entry point. One context owns one connection; tables
//! live as long as the context does.

use crate::schema::{ddl, infer_columns};
use crate::telemetry::{db_span, record_rows, DbOperation};
use crate::types::{Record, Result, Value};
use rusqlite::{Batch, Connection};
use tracing::{debug, info, trace, warn};

/// In-memory SQL session.
///
/// Single owner, single thread. Loading needs `&mut self`; queries borrow.
pub struct SqlContext {
    conn: Connection,
}

impl SqlContext {
    /// Open a fresh in-memory session.
    ///
    /// # Errors
    ///
    /// Returns `SqlError::Backend` if SQLite fails to open
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut ctx = SqlContext::new()?;
    /// ctx.table_from_dicts("people", &rows)?;
    /// let rows = ctx.query("SELECT name FROM people WHERE age > 30")?;
    /// ```
    pub fn new() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        debug!("Opened in-memory SQL session");
        Ok(Self { conn })
    }

    /// Replace table `table_name` with the contents of `rows`.
    ///
    /// Infers the column list, drops any existing table of that name,
    /// creates it, and inserts every record aligned to column order. Drop,
    /// create and insert commit together.
    ///
    /// # Arguments
    ///
    /// * `table_name` - Table to (re)create; used verbatim in SQL
    /// * `rows` - Records to load
    ///
    /// # Errors
    ///
    /// - `SqlError::SchemaConflict` if a field holds more than one non-null
    ///   kind. Nothing is executed and any prior table is untouched.
    /// - `SqlError::Backend` if SQLite rejects a statement. The transaction
    ///   rolls back.
    pub fn table_from_dicts(&mut self, table_name: &str, rows: &[Record]) -> Result<()> {
        let span = db_span(DbOperation::Load, Some(table_name));
        let _guard = span.enter();

        let columns = match infer_columns(rows) {
            Ok(columns) => columns,
            Err(e) => {
                warn!(error = %e, "Schema inference failed, table not loaded");
                return Err(e);
            }
        };

        let create = ddl::create_table(table_name, &columns);
        debug!(ddl = %create, "Inferred table schema");

        let tx = self.conn.transaction()?;
        tx.execute(&ddl::drop_table(table_name), ())?;
        tx.execute(&create, ())?;
        {
            let mut insert = tx.prepare(&ddl::insert_into(table_name, &columns))?;
            for record in rows {
                let row = ddl::align_row(record, &columns);
                insert.execute(rusqlite::params_from_iter(row.iter()))?;
            }
        }
        tx.commit()?;

        record_rows(&span, rows.len());
        info!(
            table = table_name,
            rows = rows.len(),
            columns = columns.len(),
            "Loaded table"
        );
        Ok(())
    }

    /// Load JSON objects as records into `table_name`.
    ///
    /// # Errors
    ///
    /// Returns `SqlError::UnsupportedValue` if an element is not an object of
    /// scalars; otherwise as [`SqlContext::table_from_dicts`]
    pub fn table_from_json(&mut self, table_name: &str, rows: &[serde_json::Value]) -> Result<()> {
        let records = rows
            .iter()
            .cloned()
            .map(Record::from_json)
            .collect::<Result<Vec<_>>>()?;

        self.table_from_dicts(table_name, &records)
    }

    /// Execute raw SQL and return every result row.
    ///
    /// No validation or rewriting; statements without a result set return an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// Returns `SqlError::Backend` with SQLite's own error, or with
    /// `rusqlite::Error::MultipleStatement` if `sql` holds more than one
    /// statement (none of them run)
    pub fn query(&self, sql: &str) -> Result<Vec<Vec<Value>>> {
        let span = db_span(DbOperation::Query, None);
        let _guard = span.enter();
        trace!(sql, "Executing query");

        // One statement per call; a trailing `;` or whitespace is not a second one
        let mut batch = Batch::new(&self.conn, sql);
        let mut stmt = match batch.next()? {
            Some(stmt) => stmt,
            None => return Ok(Vec::new()),
        };
        if batch.next()?.is_some() {
            return Err(rusqlite::Error::MultipleStatement.into());
        }

        let width = stmt.column_count();

        let rows = stmt
            .query_map((), |row| {
                (0..width)
                    .map(|i| row.get_ref(i).map(Value::from))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        record_rows(&span, rows.len());
        debug!(rows = rows.len(), "Query complete");
        Ok(rows)
    }
}
