//! # tabledb
//!
//! In-process keyed record store: independent named tables of opaque
//! records, addressed by opaque, unforgeable keys.
//!
//! A [`Database`] is a registry of named [`Table`]s. Each table owns one
//! mapping from [`Key`] to record value and offers five primitives —
//! `create`, `read` (plus `read_all`), `set`, `update`, `delete` — each
//! returning a result descriptor that reports prior state, new state, and
//! whether the operation had effect.
//!
//! ## Quick Start
//!
//! ```
//! use tabledb::{Database, Update};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut db = Database::new();
//! let people = db.create_table::<Person>("people")?;
//!
//! // Create mints a fresh, unforgeable key.
//! let created = people.create(Person { name: "John".into(), age: 42 });
//!
//! // Update consults a thunk with the current record.
//! people.update(created.key, |person| match person {
//!     Some(p) => Update::Replace(Person { age: p.age + 1, ..p.clone() }),
//!     None => Update::Keep,
//! });
//!
//! assert_eq!(people.read(created.key).value.map(|p| p.age), Some(43));
//!
//! // Delete reports whether removal took effect; a vacant key is not an error.
//! assert!(people.delete(created.key).deleted);
//! assert!(!people.delete(created.key).deleted);
//! # Ok::<(), tabledb::Error>(())
//! ```
//!
//! ## Design
//!
//! - **Missing is data, not an error.** Every table operation is total over
//!   its key argument; absence is reported in the descriptor. Only the
//!   registry errors: duplicate name on create, unknown name on lookup, and
//!   wrong record type on recovery.
//! - **Keys are identity tokens.** A [`Key`] can only be obtained from
//!   [`Table::create`]; it embeds the minting table's identity and cannot
//!   be built from a string or number, nor deserialized. Keys never cross
//!   tables.
//! - **Single thread of control.** Operations take `&`/`&mut` receivers and
//!   complete synchronously; there is no interior mutability and no
//!   concurrent-access contract.

#![warn(missing_docs)]

mod database;
mod error;
mod results;
mod table;
mod types;

pub mod prelude;

// Re-export main entry points
pub use database::Database;
pub use error::{Error, Result};

// Re-export the table and its iterator
pub use table::{ReadAll, Table};

// Re-export identity tokens and result descriptors
pub use results::{
    CreateResult, DeleteResult, Entry, ReadResult, SetResult, Update, UpdateResult,
};
pub use types::{Key, TableId};
