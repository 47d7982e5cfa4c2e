use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::DataAccessError;

/// Factory for live, exclusively-owned database connections.
///
/// The template holds a source by value and asks it for a fresh connection
/// per call (or once per transaction). Pooling policy lives behind this
/// trait, not in the template.
pub trait ConnectionSource {
    /// Open a connection the caller owns exclusively until it is dropped.
    ///
    /// # Errors
    /// Returns `DataAccessError::ConnectionError` if the backing store is
    /// unreachable or cannot be opened.
    fn acquire(&self) -> Result<Connection, DataAccessError>;
}

/// File-backed SQLite connection source.
///
/// Every acquired connection runs in WAL mode with a busy timeout, so
/// independent connections from concurrent threads can coexist on one
/// database file.
#[derive(Debug, Clone)]
pub struct SqliteSource {
    db_path: PathBuf,
}

impl SqliteSource {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

impl ConnectionSource for SqliteSource {
    fn acquire(&self) -> Result<Connection, DataAccessError> {
        let conn = Connection::open(&self.db_path).map_err(|e| {
            DataAccessError::ConnectionError(format!(
                "failed to open {}: {e}",
                self.db_path.display()
            ))
        })?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
        .map_err(|e| {
            DataAccessError::ConnectionError(format!("failed to configure connection: {e}"))
        })?;
        Ok(conn)
    }
}
