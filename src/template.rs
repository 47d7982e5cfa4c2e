use crate::cardinality::{single_optional, single_required};
use crate::error::DataAccessError;
use crate::executor;
use crate::results::RowMapper;
use crate::source::ConnectionSource;
use crate::types::RowValues;

/// Reusable execution template: one connection per call, strict positional
/// binding, mapped results, and guaranteed release of connection, statement,
/// and cursor on every exit path.
///
/// The template is stateless apart from the source it holds, so it is safe
/// to share across threads; each call acquires its own connection.
///
/// ```rust,no_run
/// use sql_template::prelude::*;
///
/// let template = SqlTemplate::new(SqliteSource::new("app.db"));
/// let names = template.execute_select(
///     "SELECT name FROM users WHERE active = ?1",
///     &[RowValues::Bool(true)],
///     |row: &SqlRow| {
///         row.get("name")
///             .and_then(RowValues::as_text)
///             .map(ToString::to_string)
///             .ok_or_else(|| DataAccessError::MappingError("missing name".into()))
///     },
/// )?;
/// # let _ = names;
/// # Ok::<(), DataAccessError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SqlTemplate<S> {
    source: S,
}

impl<S: ConnectionSource> SqlTemplate<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The connection source this template acquires from.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Execute a DML statement (INSERT, UPDATE, DELETE) and return the
    /// affected-row count.
    ///
    /// # Errors
    /// Returns `DataAccessError` if acquisition, preparation, binding, or
    /// execution fails.
    pub fn execute_dml(&self, query: &str, params: &[RowValues]) -> Result<usize, DataAccessError> {
        let conn = self.source.acquire()?;
        executor::execute_dml(&conn, query, params)
    }

    /// Execute a SELECT and map every row, in result order, into an owned
    /// collection.
    ///
    /// # Errors
    /// Returns `DataAccessError` if any step, including mapping, fails.
    pub fn execute_select<T, M>(
        &self,
        query: &str,
        params: &[RowValues],
        mapper: M,
    ) -> Result<Vec<T>, DataAccessError>
    where
        M: RowMapper<T>,
    {
        let conn = self.source.acquire()?;
        executor::execute_select(&conn, query, params, mapper)
    }

    /// Execute a batch of unparameterized statements (typically DDL).
    ///
    /// # Errors
    /// Returns `DataAccessError` if acquisition or any statement fails.
    pub fn execute_batch(&self, query: &str) -> Result<(), DataAccessError> {
        let conn = self.source.acquire()?;
        executor::execute_batch(&conn, query)
    }

    /// Execute a SELECT expected to produce exactly one row.
    ///
    /// # Errors
    /// Returns `DataAccessError::IncorrectResultSize` for zero or multiple
    /// rows, or any execution/mapping failure.
    pub fn query_one<T, M>(
        &self,
        query: &str,
        params: &[RowValues],
        mapper: M,
    ) -> Result<T, DataAccessError>
    where
        M: RowMapper<T>,
    {
        single_required(self.execute_select(query, params, mapper)?)
    }

    /// Execute a SELECT expected to produce at most one row.
    ///
    /// # Errors
    /// Returns `DataAccessError::IncorrectResultSize` for multiple rows, or
    /// any execution/mapping failure.
    pub fn query_optional<T, M>(
        &self,
        query: &str,
        params: &[RowValues],
        mapper: M,
    ) -> Result<Option<T>, DataAccessError>
    where
        M: RowMapper<T>,
    {
        single_optional(self.execute_select(query, params, mapper)?)
    }
}
