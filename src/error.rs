//! Unified error types for tabledb.
//!
//! Only the table registry can fail: creating a table under a taken name,
//! looking up a name that was never registered, or recovering a table under
//! the wrong record type. Record-level operations never error — a missing
//! key is ordinary data and is reported through the result descriptors.

use thiserror::Error;

/// All tabledb errors.
///
/// This is the canonical error type for all registry operations. Every
/// variant is raised synchronously and leaves the registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A table with this name is already registered
    #[error("cannot create duplicate table {0:?}")]
    DuplicateName(String),

    /// No table with this name is registered
    #[error("cannot find table {0:?}")]
    NotFound(String),

    /// The table exists but holds a different record type
    #[error("wrong record type for table {table:?}: stores {stored}, requested {requested}")]
    WrongType {
        /// Name of the table that was looked up
        table: String,
        /// Record type the table was created with
        stored: &'static str,
        /// Record type the caller asked for
        requested: &'static str,
    },
}

/// Result type for tabledb registry operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a duplicate-name error.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateName(_))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a wrong-record-type error.
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Error::WrongType { .. })
    }

    /// Name of the table the failed operation referred to.
    pub fn table_name(&self) -> &str {
        match self {
            Error::DuplicateName(name) => name,
            Error::NotFound(name) => name,
            Error::WrongType { table, .. } => table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let err = Error::DuplicateName("users".to_string());
        assert_eq!(err.to_string(), "cannot create duplicate table \"users\"");
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::NotFound("ghosts".to_string());
        assert_eq!(err.to_string(), "cannot find table \"ghosts\"");
    }

    #[test]
    fn test_wrong_type_display_mentions_both_types() {
        let err = Error::WrongType {
            table: "users".to_string(),
            stored: "alloc::string::String",
            requested: "i64",
        };
        let msg = err.to_string();
        assert!(msg.contains("users"));
        assert!(msg.contains("alloc::string::String"));
        assert!(msg.contains("i64"));
    }

    #[test]
    fn test_predicates() {
        let dup = Error::DuplicateName("a".to_string());
        let missing = Error::NotFound("b".to_string());
        let wrong = Error::WrongType {
            table: "c".to_string(),
            stored: "x",
            requested: "y",
        };

        assert!(dup.is_duplicate() && !dup.is_not_found() && !dup.is_wrong_type());
        assert!(missing.is_not_found() && !missing.is_duplicate());
        assert!(wrong.is_wrong_type() && !wrong.is_not_found());
    }

    #[test]
    fn test_table_name_accessor() {
        assert_eq!(Error::DuplicateName("a".to_string()).table_name(), "a");
        assert_eq!(Error::NotFound("b".to_string()).table_name(), "b");
        let wrong = Error::WrongType {
            table: "c".to_string(),
            stored: "x",
            requested: "y",
        };
        assert_eq!(wrong.table_name(), "c");
    }
}
