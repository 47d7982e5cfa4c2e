//! Convenient imports for common functionality.

pub use crate::cardinality::{single_optional, single_required};
pub use crate::error::DataAccessError;
pub use crate::results::{RowMapper, SqlRow};
pub use crate::source::{ConnectionSource, SqliteSource};
pub use crate::template::SqlTemplate;
pub use crate::transaction::{Tx, begin_transaction, with_transaction};
pub use crate::types::{QueryAndParams, RowValues};
