//! Convenient imports for tabledb.
//!
//! Re-exports the whole public surface so callers can get started with a
//! single import:
//!
//! ```
//! use tabledb::prelude::*;
//!
//! let mut db = Database::new();
//! let table = db.create_table::<i64>("counters")?;
//! let key = table.create(0).key;
//! table.update(key, |n| Update::Replace(n.copied().unwrap_or(0) + 1));
//! # Ok::<(), Error>(())
//! ```

// Main entry point
pub use crate::database::Database;

// Error handling
pub use crate::error::{Error, Result};

// The table and its iterator
pub use crate::table::{ReadAll, Table};

// Identity tokens
pub use crate::types::{Key, TableId};

// Result descriptors and the update verdict
pub use crate::results::{
    CreateResult, DeleteResult, Entry, ReadResult, SetResult, Update, UpdateResult,
};
