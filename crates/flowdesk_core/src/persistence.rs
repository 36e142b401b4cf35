//! Persistence adapter between the in-memory snapshot and host storage.
//!
//! # Responsibility
//! - Serialize the full snapshot as JSON under one fixed key.
//! - Read it back, re-canonicalizing tasks to absorb schema drift.
//!
//! # Invariants
//! - Failures are reported as `PersistError`, never panics.
//! - A missing backend behaves as "nothing stored" for reads and rejects
//!   writes with `PersistError::Unavailable`.

use crate::model::snapshot::{Snapshot, StoredSnapshot};
use crate::seed::canonicalize_task;
use crate::storage::{KeyValueStorage, StorageError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key used when no override is configured.
pub const DEFAULT_STORAGE_KEY: &str = "flowdesk-demo-data";

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    /// No storage backend is attached.
    Unavailable,
    Storage(StorageError),
    Encode(serde_json::Error),
    /// Stored value is not a readable snapshot.
    Corrupt(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "no storage backend available"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::Corrupt(err) => write!(f, "stored snapshot is corrupt: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable => None,
            Self::Storage(err) => Some(err),
            Self::Encode(err) | Self::Corrupt(err) => Some(err),
        }
    }
}

impl From<StorageError> for PersistError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Reads and writes whole snapshots through an optional storage backend.
pub struct PersistenceAdapter<S: KeyValueStorage> {
    storage: Option<S>,
    key: String,
}

impl<S: KeyValueStorage> PersistenceAdapter<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage: Some(storage),
            key: key.into(),
        }
    }

    /// Adapter with no backend: loads find nothing, saves are rejected.
    pub fn unavailable() -> Self {
        Self {
            storage: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    pub fn storage(&self) -> Option<&S> {
        self.storage.as_ref()
    }

    /// Writes `snapshot` under the configured key.
    pub fn save(&mut self, snapshot: &Snapshot) -> PersistResult<()> {
        let storage = self.storage.as_mut().ok_or(PersistError::Unavailable)?;
        let encoded = serde_json::to_string(snapshot).map_err(PersistError::Encode)?;
        storage.set_item(&self.key, &encoded)?;
        Ok(())
    }

    /// Reads the stored snapshot.
    ///
    /// Returns `Ok(None)` when nothing (or an empty string) is stored.
    pub fn load(&self) -> PersistResult<Option<Snapshot>> {
        let storage = self.storage.as_ref().ok_or(PersistError::Unavailable)?;
        let Some(raw) = storage.get_item(&self.key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredSnapshot = serde_json::from_str(&raw).map_err(PersistError::Corrupt)?;
        Ok(Some(Snapshot {
            version: stored.version,
            projects: stored.projects,
            clients: stored.clients,
            tasks: stored.tasks.into_iter().map(canonicalize_task).collect(),
            activity: stored.activity,
            revenue: stored.revenue,
        }))
    }

    /// Removes the stored snapshot, if any.
    pub fn clear(&mut self) -> PersistResult<bool> {
        let storage = self.storage.as_mut().ok_or(PersistError::Unavailable)?;
        Ok(storage.remove_item(&self.key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{PersistError, PersistenceAdapter, DEFAULT_STORAGE_KEY};
    use crate::seed::load_seed;
    use crate::storage::{KeyValueStorage, MemoryStorage};

    #[test]
    fn save_then_load_returns_equal_snapshot() {
        let mut adapter = PersistenceAdapter::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        let snapshot = load_seed();

        adapter.save(&snapshot).unwrap();
        let loaded = adapter.load().unwrap().expect("snapshot should be stored");
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn unavailable_backend_reports_unavailable() {
        let mut adapter = PersistenceAdapter::<MemoryStorage>::unavailable();
        assert!(!adapter.is_available());
        assert!(matches!(adapter.load(), Err(PersistError::Unavailable)));
        assert!(matches!(
            adapter.save(&load_seed()),
            Err(PersistError::Unavailable)
        ));
    }

    #[test]
    fn empty_value_reads_as_absent() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "  ").unwrap();
        let adapter = PersistenceAdapter::new(storage, "k");
        assert!(adapter.load().unwrap().is_none());
    }

    #[test]
    fn garbage_reads_as_corrupt() {
        let mut storage = MemoryStorage::new();
        storage.set_item("k", "{not json").unwrap();
        let adapter = PersistenceAdapter::new(storage, "k");
        assert!(matches!(adapter.load(), Err(PersistError::Corrupt(_))));
    }

    #[test]
    fn clear_removes_stored_value() {
        let mut adapter = PersistenceAdapter::new(MemoryStorage::new(), "k");
        adapter.save(&load_seed()).unwrap();
        assert!(adapter.clear().unwrap());
        assert!(adapter.load().unwrap().is_none());
    }
}
