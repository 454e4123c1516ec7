//! The named-table registry.
//!
//! A [`Database`] is purely a namespace: it maps table names to [`Table`]
//! instances and owns them for the life of the process. All record logic
//! lives in [`Table`]; the registry only creates and hands back tables.
//!
//! Tables of differing record types live under one registry, so tables are
//! stored type-erased and recovered to the caller's record type at lookup.
//! Asking for a registered name under the wrong record type is an
//! [`Error::WrongType`], distinct from [`Error::NotFound`].

use std::any::{type_name, Any};
use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::table::Table;

/// One registered table, erased to its record type.
///
/// The record type's name is captured at registration so a wrong-type
/// lookup can say what the table actually stores.
struct TableSlot {
    type_name: &'static str,
    table: Box<dyn Any>,
}

impl std::fmt::Debug for TableSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableSlot")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// A registry of named [`Table`]s.
///
/// Names are unique: creating a table under a taken name fails and leaves
/// the existing table untouched, and looking up a name that was never
/// registered fails rather than auto-creating. Lookups return borrows of
/// the one registered instance, so every caller shares and mutates the same
/// table.
///
/// # Example
///
/// ```
/// use tabledb::Database;
///
/// let mut db = Database::new();
///
/// db.create_table::<String>("names")?;
/// let names = db.using_table_mut::<String>("names")?;
/// let key = names.create("Ada".to_string()).key;
///
/// // A later lookup sees the same table.
/// assert!(db.using_table::<String>("names")?.read(key).exists);
/// # Ok::<(), tabledb::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Database {
    tables: HashMap<String, TableSlot>,
}

impl Database {
    /// Create an empty registry.
    pub fn new() -> Self {
        Database {
            tables: HashMap::new(),
        }
    }

    /// Create and register a new, empty table for records of type `V`.
    ///
    /// Returns the new table, ready for use. Fails with
    /// [`Error::DuplicateName`] when the name is already registered, in
    /// which case the existing table is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use tabledb::Database;
    ///
    /// let mut db = Database::new();
    /// let counters = db.create_table::<i64>("counters")?;
    /// counters.create(0);
    ///
    /// assert!(db.create_table::<i64>("counters").unwrap_err().is_duplicate());
    /// # Ok::<(), tabledb::Error>(())
    /// ```
    pub fn create_table<V: 'static>(&mut self, name: impl Into<String>) -> Result<&mut Table<V>> {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }

        debug!(table = %name, record_type = type_name::<V>(), "created table");
        self.tables.insert(
            name.clone(),
            TableSlot {
                type_name: type_name::<V>(),
                table: Box::new(Table::<V>::new(name.clone())),
            },
        );

        self.using_table_mut(&name)
    }

    /// Look up a registered table for reading.
    ///
    /// Fails with [`Error::NotFound`] when the name was never registered,
    /// and with [`Error::WrongType`] when the table stores a different
    /// record type than `V`. Requesting the right type is the caller's
    /// contract; the registry checks it at runtime.
    pub fn using_table<V: 'static>(&self, name: &str) -> Result<&Table<V>> {
        let slot = self
            .tables
            .get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        let stored = slot.type_name;
        slot.table
            .downcast_ref::<Table<V>>()
            .ok_or_else(|| wrong_type::<V>(name, stored))
    }

    /// Look up a registered table for reading and writing.
    ///
    /// Same contract as [`using_table`](Database::using_table); the borrow
    /// is exclusive, so a table is only ever mutated from one place at a
    /// time.
    pub fn using_table_mut<V: 'static>(&mut self, name: &str) -> Result<&mut Table<V>> {
        let slot = self
            .tables
            .get_mut(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        let stored = slot.type_name;
        slot.table
            .downcast_mut::<Table<V>>()
            .ok_or_else(|| wrong_type::<V>(name, stored))
    }

    /// Check if a table is registered under this name.
    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Number of registered tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Iterate over the registered table names, in no particular order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

fn wrong_type<V>(name: &str, stored: &'static str) -> Error {
    let requested = type_name::<V>();
    debug!(table = %name, stored, requested, "table lookup with wrong record type");
    Error::WrongType {
        table: name.to_string(),
        stored,
        requested,
    }
}
