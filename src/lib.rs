//! Synchronous SQL execution template for rusqlite.
//!
//! One place owns the prepare/bind/execute/cleanup cycle for a statement
//! ([`template::SqlTemplate`]), callers supply row mappers to turn result
//! rows into typed values, single-object reads go through a cardinality
//! check ([`cardinality`]), and multi-step writes run under an explicit
//! commit/rollback boundary ([`transaction::with_transaction`]). Every
//! driver failure is translated into [`DataAccessError`] before it leaves
//! the crate.

pub use rusqlite;

pub mod cardinality;
pub mod error;
pub mod executor;
pub mod params;
pub mod prelude;
pub mod results;
pub mod source;
pub mod template;
pub mod transaction;
pub mod types;

pub use error::DataAccessError;
pub use results::{RowMapper, SqlRow};
pub use source::{ConnectionSource, SqliteSource};
pub use template::SqlTemplate;
pub use types::RowValues;
