use rusqlite::ToSql;
use rusqlite::types::Value;

use crate::error::DataAccessError;
use crate::types::RowValues;

/// Convert a single `RowValues` into an owned SQLite value.
#[must_use]
pub fn row_value_to_sqlite_value(value: &RowValues) -> Value {
    match value {
        RowValues::Int(i) => Value::Integer(*i),
        RowValues::Float(f) => Value::Real(*f),
        RowValues::Text(s) => Value::Text(s.clone()),
        RowValues::Bool(b) => Value::Integer(i64::from(*b)),
        RowValues::Timestamp(dt) => Value::Text(dt.format("%F %T%.f").to_string()),
        RowValues::Null => Value::Null,
        RowValues::JSON(jval) => Value::Text(jval.to_string()),
        RowValues::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}

/// Owned SQLite parameter container for one statement execution.
pub struct Params(pub Vec<Value>);

impl Params {
    /// Convert a slice of row values into SQLite values, preserving order.
    ///
    /// # Errors
    /// Returns `DataAccessError` if a value cannot be converted. The current
    /// value set always converts, but the signature keeps binding failures
    /// on the same error path as execution failures.
    pub fn convert(params: &[RowValues]) -> Result<Self, DataAccessError> {
        let mut vec_values = Vec::with_capacity(params.len());
        for p in params {
            vec_values.push(row_value_to_sqlite_value(p));
        }
        Ok(Params(vec_values))
    }

    /// Borrow the underlying values.
    #[must_use]
    pub fn as_values(&self) -> &[Value] {
        &self.0
    }

    /// Build a borrowed params slice suitable for rusqlite execution.
    #[must_use]
    pub fn as_refs(&self) -> Vec<&dyn ToSql> {
        self.0.iter().map(|v| v as &dyn ToSql).collect()
    }
}
