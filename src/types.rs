//! Identity tokens for tables and records.
//!
//! This module defines the two opaque identifier types:
//! - [`TableId`]: unique identity of one table instance
//! - [`Key`]: unforgeable handle to one record within one table
//!
//! Both are minted internally and cannot be constructed by a caller from a
//! string, number, or any other ordinary data. They implement `Serialize`
//! so they can appear in logs and exported result descriptors, but
//! deliberately not `Deserialize`: a round trip through serialized data
//! must not produce a usable handle.

use serde::Serialize;
use uuid::Uuid;

/// Unique identity of a single [`Table`](crate::Table) instance.
///
/// Every table minted by a [`Database`](crate::Database) carries a fresh
/// `TableId`, and every [`Key`] embeds the id of the table that minted it.
/// Two tables never share an id, even across database instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TableId(Uuid);

impl TableId {
    /// Mint a fresh random table identity.
    pub(crate) fn mint() -> Self {
        TableId(Uuid::new_v4())
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque, unforgeable handle to one record in one table.
///
/// Keys are minted exclusively by [`Table::create`](crate::Table::create):
/// each is the minting table's [`TableId`] plus a fresh random 128-bit
/// token, so a key minted by one table is never equal to any key minted by
/// another, and the chance of two keys from the same table colliding over a
/// process lifetime is negligible.
///
/// A key has no intrinsic structure or ordering. Passing a key to a table
/// that did not mint it is not an error; the lookup simply reports the
/// record as absent.
///
/// # Examples
///
/// ```
/// use tabledb::Database;
///
/// let mut db = Database::new();
/// let table = db.create_table::<String>("names")?;
///
/// let created = table.create("Ada".to_string());
/// assert!(table.read(created.key).exists);
/// # Ok::<(), tabledb::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Key {
    table: TableId,
    token: Uuid,
}

impl Key {
    /// Mint a fresh key for the table with the given identity.
    pub(crate) fn mint(table: TableId) -> Self {
        Key {
            table,
            token: Uuid::new_v4(),
        }
    }

    /// Identity of the table that minted this key.
    pub fn table_id(&self) -> TableId {
        self.table
    }
}

impl std::fmt::Display for Key {
    /// Display a key in the format: table_id/token
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.table, self.token)
    }
}
