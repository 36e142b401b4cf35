//! Host key-value storage port.
//!
//! # Responsibility
//! - Define the get/set-by-key contract the persistence adapter writes to.
//! - Provide a SQLite-backed store for real sessions and a bounded
//!   in-memory store for tests and ephemeral runs.
//!
//! # Invariants
//! - Values are opaque UTF-8 strings; storage never inspects them.
//! - A failed `set_item` leaves the previously stored value in place.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteKeyValueStorage;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    /// The write would exceed the storage quota.
    QuotaExceeded { requested: usize, quota: usize },
    /// The storage file was written by a newer build.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
    Sqlite(rusqlite::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded { requested, quota } => write!(
                f,
                "storage quota exceeded: {requested} bytes requested, quota is {quota} bytes"
            ),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "key-value store schema {found} is newer than supported {supported}"
            ),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::QuotaExceeded { .. } | Self::UnsupportedSchemaVersion { .. } => None,
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Byte-string store addressed by key.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
    /// Returns whether a value was removed.
    fn remove_item(&mut self, key: &str) -> StorageResult<bool>;
}
