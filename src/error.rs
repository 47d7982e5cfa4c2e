use thiserror::Error;

/// Unified error type for every failure this crate can surface.
///
/// Driver-level failures are always translated into one of these variants
/// before leaving the crate, so callers never match on `rusqlite::Error`
/// shapes directly.
#[derive(Debug, Error)]
pub enum DataAccessError {
    /// Any failure reported by the SQLite driver while preparing, binding,
    /// executing, or committing/rolling back.
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Raised only by the result-cardinality policy when a single-object
    /// query returns the wrong number of rows.
    #[error("Incorrect result size: expected {expected}, actual {actual}")]
    IncorrectResultSize { expected: usize, actual: usize },

    /// A row mapper rejected a row it was asked to convert.
    #[error("Row mapping error: {0}")]
    MappingError(String),

    /// A transaction rollback failed after an earlier step failure. Both
    /// errors are preserved: `cause` is the failure that triggered the
    /// rollback, `rollback` is the failure of the rollback itself.
    #[error("Rollback failed: {rollback} (while handling: {cause})")]
    RollbackFailed {
        cause: Box<DataAccessError>,
        rollback: Box<DataAccessError>,
    },
}

impl DataAccessError {
    /// True when this is a cardinality violation from a single-object query.
    #[must_use]
    pub fn is_incorrect_result_size(&self) -> bool {
        matches!(self, Self::IncorrectResultSize { .. })
    }
}
