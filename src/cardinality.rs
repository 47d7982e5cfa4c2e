//! Result-cardinality policy for single-object queries.
//!
//! Pure post-processing over an already-materialized result; never touches
//! the connection.

use crate::error::DataAccessError;

/// Collapse a result into exactly one value.
///
/// # Errors
/// Returns `DataAccessError::IncorrectResultSize { expected: 1, actual }`
/// unless the result holds exactly one element.
pub fn single_required<T>(mut results: Vec<T>) -> Result<T, DataAccessError> {
    match results.len() {
        1 => Ok(results.remove(0)),
        actual => Err(DataAccessError::IncorrectResultSize {
            expected: 1,
            actual,
        }),
    }
}

/// Collapse a result into at most one value.
///
/// # Errors
/// Returns `DataAccessError::IncorrectResultSize { expected: 1, actual }`
/// if the result holds more than one element.
pub fn single_optional<T>(mut results: Vec<T>) -> Result<Option<T>, DataAccessError> {
    match results.len() {
        0 => Ok(None),
        1 => Ok(Some(results.remove(0))),
        actual => Err(DataAccessError::IncorrectResultSize {
            expected: 1,
            actual,
        }),
    }
}
