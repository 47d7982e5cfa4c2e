use std::sync::Arc;

use crate::error::DataAccessError;
use crate::types::RowValues;

/// A single materialized row from a query result.
///
/// Column names are shared across all rows of one result set via `Arc`, so
/// each row only owns its values.
#[derive(Debug, Clone)]
pub struct SqlRow {
    /// The column names for this row (shared across the result set)
    pub column_names: Arc<Vec<String>>,
    /// The values for this row, in column order
    pub values: Vec<RowValues>,
}

impl SqlRow {
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, values: Vec<RowValues>) -> Self {
        Self {
            column_names,
            values,
        }
    }

    /// Get a value by column name, or `None` if the column doesn't exist.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        self.column_names
            .iter()
            .position(|col| col == column_name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a value by column index, or `None` if out of bounds.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.values.get(index)
    }
}

/// Converts one result row into a typed value.
///
/// Mappers are invoked once per row, in result order. They must be pure
/// with respect to the template: no retained resources, no shared mutable
/// state, safe to call again on a repeated read.
///
/// Blanket-implemented for closures, which is the usual way to supply one:
/// ```rust
/// use sql_template::prelude::*;
///
/// let mapper = |row: &SqlRow| -> Result<i64, DataAccessError> {
///     row.get("id")
///         .and_then(RowValues::as_int)
///         .copied()
///         .ok_or_else(|| DataAccessError::MappingError("missing id column".into()))
/// };
/// # let _ = mapper;
/// ```
pub trait RowMapper<T> {
    /// Convert `row` into a `T`.
    ///
    /// # Errors
    /// Returns `DataAccessError::MappingError` (or any other variant) to
    /// abort the enclosing query.
    fn map(&self, row: &SqlRow) -> Result<T, DataAccessError>;
}

impl<T, F> RowMapper<T> for F
where
    F: Fn(&SqlRow) -> Result<T, DataAccessError>,
{
    fn map(&self, row: &SqlRow) -> Result<T, DataAccessError> {
        self(row)
    }
}
