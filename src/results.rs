//! Result descriptors for the five record operations.
//!
//! Every [`Table`](crate::Table) operation reports what it saw and what it
//! did: the key it addressed, the value present before the call, the value
//! present after it, and whether the operation took effect. Nothing about a
//! record's presence is an error; absence is reported here as data.
//!
//! Field conventions, shared across descriptors:
//! - `existed` — a record was present at the key strictly before the call
//! - `exists` — a record is present at the key (for [`ReadResult`], at the
//!   moment the lookup ran)
//! - `old_value` — the record replaced or removed, `None` if none existed
//! - `new_value` — the record stored by the call

use serde::Serialize;

use crate::types::Key;

/// Result of [`Table::create`](crate::Table::create).
///
/// `create` always succeeds and always mints a brand-new key, so `existed`
/// is always `false` and `created` always `true`; they are carried so every
/// mutation descriptor reports prior state and effect the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateResult<V> {
    /// Freshly minted key now addressing the record
    pub key: Key,
    /// The record as stored
    pub new_value: V,
    /// Whether a record was present before the call (never, for `create`)
    pub existed: bool,
    /// Whether a record was stored (always, for `create`)
    pub created: bool,
}

/// Result of [`Table::read`](crate::Table::read).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadResult<V> {
    /// The key that was looked up
    pub key: Key,
    /// The record at the key, `None` if absent
    pub value: Option<V>,
    /// Whether a record is present at the key
    pub exists: bool,
}

/// One entry yielded by [`Table::read_all`](crate::Table::read_all).
///
/// Unlike [`ReadResult`], an entry is only ever produced for a record that
/// is present, so the value is a plain borrow rather than an option: this
/// path never yields tombstones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry<'a, V> {
    /// Key addressing the record
    pub key: Key,
    /// The stored record
    pub value: &'a V,
}

/// Result of [`Table::set`](crate::Table::set).
///
/// `set` is an unconditional upsert, so `did_set` is always `true`;
/// `existed` and `old_value` distinguish overwrite from insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetResult<V> {
    /// The key that was written
    pub key: Key,
    /// The record replaced, `None` if the key was vacant
    pub old_value: Option<V>,
    /// The record as stored
    pub new_value: V,
    /// Whether a record was present before the call
    pub existed: bool,
    /// Whether the write happened (always, for `set`)
    pub did_set: bool,
}

/// Result of [`Table::update`](crate::Table::update).
///
/// `new_value` is `Some` exactly when the thunk replaced the record
/// (`updated: true`) and `None` exactly when it abstained
/// (`updated: false`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateResult<V> {
    /// The key the thunk was consulted about
    pub key: Key,
    /// The record present before the call, `None` if the key was vacant
    pub old_value: Option<V>,
    /// The record written, `None` if the thunk abstained
    pub new_value: Option<V>,
    /// Whether a record was present before the call
    pub existed: bool,
    /// Whether the thunk replaced the record
    pub updated: bool,
}

/// Result of [`Table::delete`](crate::Table::delete).
///
/// `deleted` mirrors `existed`: removal took effect exactly when there was
/// a record to remove. Deleting a vacant key is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteResult<V> {
    /// The key that was removed
    pub key: Key,
    /// The record removed, `None` if the key was vacant
    pub old_value: Option<V>,
    /// Whether a record was present before the call
    pub existed: bool,
    /// Whether a record was actually removed
    pub deleted: bool,
}

/// Verdict returned by an [`update`](crate::Table::update) thunk.
///
/// The thunk inspects the current record (if any) and either replaces it or
/// explicitly abstains. The two-way branch is a dedicated enum rather than
/// an `Option` so that "no change" is an intentional signal, not an
/// accidental default.
///
/// # Examples
///
/// ```
/// use tabledb::{Database, Update};
///
/// let mut db = Database::new();
/// let table = db.create_table::<i64>("counters")?;
/// let key = table.create(1).key;
///
/// // Replace: bump the counter.
/// let bumped = table.update(key, |current| match current {
///     Some(n) => Update::Replace(n + 1),
///     None => Update::Keep,
/// });
/// assert!(bumped.updated);
/// assert_eq!(bumped.new_value, Some(2));
///
/// // Keep: leave it alone.
/// let kept = table.update(key, |_| Update::Keep);
/// assert!(!kept.updated);
/// assert_eq!(table.read(key).value, Some(2));
/// # Ok::<(), tabledb::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update<V> {
    /// Leave the stored record (if any) untouched.
    Keep,
    /// Store this record under the key, with `set` semantics.
    Replace(V),
}

impl<V> Update<V> {
    /// Check if this verdict replaces the record.
    pub fn is_replace(&self) -> bool {
        matches!(self, Update::Replace(_))
    }

    /// Check if this verdict abstains.
    pub fn is_keep(&self) -> bool {
        matches!(self, Update::Keep)
    }
}

impl<V> From<Option<V>> for Update<V> {
    /// `Some(v)` becomes [`Update::Replace`]; `None` becomes [`Update::Keep`].
    fn from(opt: Option<V>) -> Self {
        match opt {
            Some(v) => Update::Replace(v),
            None => Update::Keep,
        }
    }
}
