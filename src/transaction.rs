//! Explicit transaction coordination over one shared connection.
//!
//! The execution template acquires a fresh connection per call, which is
//! the wrong shape for a multi-step write that must commit or roll back as
//! a unit. [`with_transaction`] instead acquires one connection, suspends
//! auto-commit, runs the caller's steps against that connection in order,
//! and resolves the transaction exactly once.

use std::ops::Deref;

use rusqlite::Connection;

use crate::error::DataAccessError;
use crate::executor;
use crate::results::RowMapper;
use crate::source::ConnectionSource;
use crate::types::RowValues;

/// An open transaction owning the connection's auto-commit state until
/// commit or rollback.
///
/// Derefs to [`Connection`], so data-access functions written against
/// `&Connection` participate in the transaction without knowing about it.
/// Dropping an unresolved `Tx` rolls back, so the connection never escapes
/// with a dangling uncommitted state.
pub struct Tx<'conn> {
    inner: rusqlite::Transaction<'conn>,
}

/// Begin a transaction on `conn`, suspending auto-commit until the returned
/// handle is committed or rolled back.
///
/// # Errors
/// Returns `DataAccessError` if the transaction cannot be started.
pub fn begin_transaction(conn: &mut Connection) -> Result<Tx<'_>, DataAccessError> {
    let inner = conn.transaction()?;
    Ok(Tx { inner })
}

impl Tx<'_> {
    /// The shared connection all steps of this transaction execute on.
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &*self.inner
    }

    /// Execute a DML statement within this transaction.
    ///
    /// # Errors
    /// Returns `DataAccessError` if preparation, binding, or execution fails.
    pub fn execute_dml(&self, query: &str, params: &[RowValues]) -> Result<usize, DataAccessError> {
        executor::execute_dml(&self.inner, query, params)
    }

    /// Execute a SELECT within this transaction. Reads observe the effects
    /// of earlier uncommitted steps on the same connection.
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
        executor::execute_select(&self.inner, query, params, mapper)
    }

    /// Commit the transaction, consuming the handle.
    ///
    /// # Errors
    /// Returns `DataAccessError` if the commit fails.
    pub fn commit(self) -> Result<(), DataAccessError> {
        self.inner.commit()?;
        Ok(())
    }

    /// Roll back the transaction, consuming the handle.
    ///
    /// # Errors
    /// Returns `DataAccessError` if the rollback fails.
    pub fn rollback(self) -> Result<(), DataAccessError> {
        self.inner.rollback()?;
        Ok(())
    }
}

impl Deref for Tx<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &*self.inner
    }
}

/// Run `steps` as one coordinated operation: acquire a connection, suspend
/// auto-commit, execute the steps in caller order on that connection, then
/// commit on success or roll back on failure. Exactly one commit-or-rollback
/// happens per call, and the connection is released on every path.
///
/// If acquisition itself fails there is no connection to roll back; the
/// acquisition error surfaces directly.
///
/// # Errors
/// - the original step failure, after a successful rollback;
/// - `DataAccessError::RollbackFailed` carrying both errors, if the
///   rollback fails too;
/// - any acquisition, begin, or commit failure.
pub fn with_transaction<S, T, F>(source: &S, steps: F) -> Result<T, DataAccessError>
where
    S: ConnectionSource + ?Sized,
    F: FnOnce(&Tx<'_>) -> Result<T, DataAccessError>,
{
    let mut conn = source.acquire()?;
    let tx = begin_transaction(&mut conn)?;
    match steps(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(cause) => {
            tracing::error!(error = %cause, "transaction step failed, rolling back");
            match tx.rollback() {
                Ok(()) => Err(cause),
                Err(rollback) => {
                    tracing::error!(error = %rollback, "rollback failed");
                    Err(DataAccessError::RollbackFailed {
                        cause: Box::new(cause),
                        rollback: Box::new(rollback),
                    })
                }
            }
        }
    }
}
