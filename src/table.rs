//! The record table: five CRUD primitives over one keyed collection.
//!
//! A [`Table`] owns a single mapping from opaque [`Key`] to record value.
//! Every operation is total over its key argument — an unknown or foreign
//! key is reported through the result descriptor, never raised as an error
//! — and every operation reports the state it saw before acting.
//!
//! # Example
//!
//! ```
//! use tabledb::{Database, Update};
//!
//! let mut db = Database::new();
//! let table = db.create_table::<String>("notes")?;
//!
//! let created = table.create("first draft".to_string());
//! let read = table.read(created.key);
//! assert_eq!(read.value.as_deref(), Some("first draft"));
//!
//! table.update(created.key, |_| Update::Replace("second draft".to_string()));
//! let deleted = table.delete(created.key);
//! assert!(deleted.deleted);
//! # Ok::<(), tabledb::Error>(())
//! ```

use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;

use tracing::trace;

use crate::results::{CreateResult, DeleteResult, Entry, ReadResult, SetResult, Update, UpdateResult};
use crate::types::{Key, TableId};

/// One stored record plus its insertion position.
///
/// The sequence number fixes the record's place in [`Table::read_all`]
/// order: assigned when the key is first inserted and kept across
/// overwrites, so iteration order is insertion order.
#[derive(Debug, Clone)]
struct Slot<V> {
    seq: u64,
    value: V,
}

/// A single named collection mapping opaque keys to record values.
///
/// Tables are created and owned by a [`Database`](crate::Database); the
/// registry hands out borrows of the one instance, so every caller sees and
/// mutates the same collection. Keys are minted exclusively by
/// [`create`](Table::create) and are only ever valid in the table that
/// minted them — a foreign key simply reads as absent.
#[derive(Debug)]
pub struct Table<V> {
    name: String,
    id: TableId,
    slots: HashMap<Key, Slot<V>>,
    next_seq: u64,
}

impl<V> Table<V> {
    /// Build a new empty table. Only the registry mints tables.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            id: TableId::mint(),
            slots: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Name the table was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity of this table instance.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if a record is present at the key.
    pub fn contains(&self, key: Key) -> bool {
        self.slots.contains_key(&key)
    }

    /// Iterate over all current records in insertion order.
    ///
    /// Every yielded [`Entry`] addresses a record that exists at the moment
    /// the iterator was built; this path never yields tombstones. The order
    /// is the order keys were first inserted (overwriting a record with
    /// [`set`](Table::set) keeps its original position) and is stable
    /// within one pass, but carries no further meaning.
    ///
    /// # Example
    ///
    /// ```
    /// use tabledb::Database;
    ///
    /// let mut db = Database::new();
    /// let table = db.create_table::<i64>("readings")?;
    /// table.create(10);
    /// table.create(20);
    ///
    /// let values: Vec<i64> = table.read_all().map(|entry| *entry.value).collect();
    /// assert_eq!(values, vec![10, 20]);
    /// # Ok::<(), tabledb::Error>(())
    /// ```
    pub fn read_all(&self) -> ReadAll<'_, V> {
        let mut entries: Vec<(u64, Entry<'_, V>)> = self
            .slots
            .iter()
            .map(|(key, slot)| {
                (
                    slot.seq,
                    Entry {
                        key: *key,
                        value: &slot.value,
                    },
                )
            })
            .collect();
        entries.sort_unstable_by_key(|(seq, _)| *seq);

        ReadAll {
            inner: entries.into_iter(),
        }
    }
}

impl<V: Clone> Table<V> {
    /// Store a record under a freshly minted key.
    ///
    /// Always succeeds: the key is brand new, so nothing can already exist
    /// under it and nothing is overwritten.
    ///
    /// # Example
    ///
    /// ```
    /// use tabledb::Database;
    ///
    /// let mut db = Database::new();
    /// let table = db.create_table::<String>("notes")?;
    ///
    /// let created = table.create("hello".to_string());
    /// assert!(created.created);
    /// assert!(!created.existed);
    /// # Ok::<(), tabledb::Error>(())
    /// ```
    pub fn create(&mut self, new_value: V) -> CreateResult<V> {
        let key = Key::mint(self.id);
        let seq = self.next_seq;
        self.next_seq += 1;

        self.slots.insert(
            key,
            Slot {
                seq,
                value: new_value.clone(),
            },
        );
        trace!(table = %self.name, %key, "created record");

        CreateResult {
            key,
            new_value,
            existed: false,
            created: true,
        }
    }

    /// Look up the record at a key.
    ///
    /// Never fails: a key this table never minted (or whose record was
    /// deleted) reports `exists: false` with no value.
    pub fn read(&self, key: Key) -> ReadResult<V> {
        let slot = self.slots.get(&key);

        ReadResult {
            key,
            value: slot.map(|slot| slot.value.clone()),
            exists: slot.is_some(),
        }
    }

    /// Unconditionally write a record at a key.
    ///
    /// Overwrites the existing record or inserts a new one if the key is
    /// vacant; the descriptor reports which happened and what was replaced.
    ///
    /// # Example
    ///
    /// ```
    /// use tabledb::Database;
    ///
    /// let mut db = Database::new();
    /// let table = db.create_table::<i64>("counters")?;
    /// let key = table.create(1).key;
    ///
    /// let set = table.set(key, 2);
    /// assert!(set.existed);
    /// assert_eq!(set.old_value, Some(1));
    /// assert_eq!(set.new_value, 2);
    /// # Ok::<(), tabledb::Error>(())
    /// ```
    pub fn set(&mut self, key: Key, new_value: V) -> SetResult<V> {
        let old_value = match self.slots.entry(key) {
            MapEntry::Occupied(mut occupied) => {
                let slot = occupied.get_mut();
                Some(std::mem::replace(&mut slot.value, new_value.clone()))
            }
            MapEntry::Vacant(vacant) => {
                let seq = self.next_seq;
                self.next_seq += 1;
                vacant.insert(Slot {
                    seq,
                    value: new_value.clone(),
                });
                None
            }
        };

        let existed = old_value.is_some();
        trace!(table = %self.name, %key, existed, "set record");

        SetResult {
            key,
            old_value,
            new_value,
            existed,
            did_set: true,
        }
    }

    /// Consult a thunk about the record at a key and apply its verdict.
    ///
    /// The thunk sees the current record (`None` if the key is vacant) and
    /// returns [`Update::Replace`] to store a new record with
    /// [`set`](Table::set) semantics, or [`Update::Keep`] to leave the
    /// stored record untouched. The thunk is the only way to see the prior
    /// value and decide; it never mutates in place.
    ///
    /// `existed` and `old_value` in the descriptor reflect state strictly
    /// before this call.
    ///
    /// # Example
    ///
    /// ```
    /// use tabledb::{Database, Update};
    ///
    /// let mut db = Database::new();
    /// let table = db.create_table::<i64>("counters")?;
    /// let key = table.create(41).key;
    ///
    /// let result = table.update(key, |current| match current {
    ///     Some(n) => Update::Replace(n + 1),
    ///     None => Update::Keep,
    /// });
    /// assert!(result.updated);
    /// assert_eq!(result.old_value, Some(41));
    /// assert_eq!(result.new_value, Some(42));
    /// # Ok::<(), tabledb::Error>(())
    /// ```
    pub fn update(
        &mut self,
        key: Key,
        thunk: impl FnOnce(Option<&V>) -> Update<V>,
    ) -> UpdateResult<V> {
        let slot = self.slots.get(&key);
        let existed = slot.is_some();
        let old_value = slot.map(|slot| slot.value.clone());
        let verdict = thunk(slot.map(|slot| &slot.value));

        match verdict {
            Update::Replace(value) => {
                let written = self.set(key, value);
                trace!(table = %self.name, %key, existed, "updated record");

                UpdateResult {
                    key,
                    old_value,
                    new_value: Some(written.new_value),
                    existed,
                    updated: true,
                }
            }
            Update::Keep => UpdateResult {
                key,
                old_value,
                new_value: None,
                existed,
                updated: false,
            },
        }
    }

    /// Remove the record at a key, if any.
    ///
    /// Never fails: deleting a vacant key reports `deleted: false`. The
    /// descriptor carries the removed record, so this is also the way to
    /// take a value out of the table.
    pub fn delete(&mut self, key: Key) -> DeleteResult<V> {
        let removed = self.slots.remove(&key);
        let existed = removed.is_some();
        let old_value = removed.map(|slot| slot.value);
        trace!(table = %self.name, %key, deleted = existed, "deleted record");

        DeleteResult {
            key,
            old_value,
            existed,
            deleted: existed,
        }
    }
}

/// Iterator over all current records of a table, in insertion order.
///
/// Returned by [`Table::read_all`]. The snapshot of keys and positions is
/// taken when the iterator is built; it borrows the table, so the table
/// cannot be mutated mid-pass.
#[derive(Debug)]
pub struct ReadAll<'a, V> {
    inner: std::vec::IntoIter<(u64, Entry<'a, V>)>,
}

impl<'a, V> Iterator for ReadAll<'a, V> {
    type Item = Entry<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, entry)| entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for ReadAll<'_, V> {}
