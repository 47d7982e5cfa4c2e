//! Connection-level execution core.
//!
//! These functions run against an externally supplied `&Connection`, which
//! is what lets data-access code participate in a caller-managed
//! transaction: the transaction coordinator opens one connection and every
//! step executes here against it. The [`crate::template::SqlTemplate`]
//! wrappers acquire a fresh connection per call and delegate down.

use std::sync::Arc;

use rusqlite::Connection;
use rusqlite::types::ValueRef;

use crate::error::DataAccessError;
use crate::params::Params;
use crate::results::{RowMapper, SqlRow};
use crate::types::RowValues;

fn extract_value(row: &rusqlite::Row, idx: usize) -> Result<RowValues, DataAccessError> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(RowValues::Null),
        ValueRef::Integer(i) => Ok(RowValues::Int(i)),
        ValueRef::Real(f) => Ok(RowValues::Float(f)),
        ValueRef::Text(bytes) => Ok(RowValues::Text(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Blob(b) => Ok(RowValues::Blob(b.to_vec())),
    }
}

/// Execute a DML statement (INSERT, UPDATE, DELETE) on `conn`.
///
/// Parameters bind positionally, left to right, starting at placeholder 1.
/// The prepared statement is scoped to this call and released on every exit
/// path.
///
/// # Errors
/// Returns `DataAccessError` if preparation, binding, or execution fails.
pub fn execute_dml(
    conn: &Connection,
    query: &str,
    params: &[RowValues],
) -> Result<usize, DataAccessError> {
    tracing::debug!(query, param_count = params.len(), "executing dml");
    let converted = Params::convert(params)?;
    let mut stmt = conn.prepare(query)?;
    let rows = stmt.execute(&converted.as_refs()[..])?;
    Ok(rows)
}

/// Execute a SELECT on `conn`, invoking `mapper` once per row in result
/// order.
///
/// The returned collection is fully materialized before this function
/// returns; there is no resumable cursor. A mapper failure aborts the call
/// and discards the partial result, with statement and cursor released by
/// scope.
///
/// # Errors
/// Returns `DataAccessError` if preparation, binding, execution, value
/// extraction, or mapping fails.
pub fn execute_select<T, M>(
    conn: &Connection,
    query: &str,
    params: &[RowValues],
    mapper: M,
) -> Result<Vec<T>, DataAccessError>
where
    M: RowMapper<T>,
{
    tracing::debug!(query, param_count = params.len(), "executing select");
    let converted = Params::convert(params)?;
    let mut stmt = conn.prepare(query)?;

    let column_names: Arc<Vec<String>> =
        Arc::new(stmt.column_names().iter().map(ToString::to_string).collect());

    let mut rows_iter = stmt.query(&converted.as_refs()[..])?;
    let mut mapped = Vec::new();
    while let Some(row) = rows_iter.next()? {
        let mut values = Vec::with_capacity(column_names.len());
        for i in 0..column_names.len() {
            values.push(extract_value(row, i)?);
        }
        let sql_row = SqlRow::new(Arc::clone(&column_names), values);
        mapped.push(mapper.map(&sql_row)?);
    }
    Ok(mapped)
}

/// Execute a batch of unparameterized statements (typically DDL) on `conn`.
///
/// # Errors
/// Returns `DataAccessError` if any statement in the batch fails.
pub fn execute_batch(conn: &Connection, query: &str) -> Result<(), DataAccessError> {
    tracing::debug!(query, "executing batch");
    conn.execute_batch(query)?;
    Ok(())
}
