//! Data store: owns the single live snapshot and its lifecycle.
//!
//! # Responsibility
//! - Materialize the snapshot lazily: persisted state first, seed second.
//! - Rebuild from seed on explicit refresh/reset and persist at once.
//! - Hand out repository handles that mutate the snapshot in place.
//!
//! # Invariants
//! - At most one snapshot is live per store; it is replaced only by
//!   `refresh_cache`/`reset_to_seed`.
//! - Persistence failures are logged and recorded, never returned to
//!   repository callers.
//! - Single logical thread of control; no interior locking.

use crate::config::StoreConfig;
use crate::model::snapshot::Snapshot;
use crate::persistence::{PersistError, PersistenceAdapter};
use crate::repo::activity_repo::ActivityRepository;
use crate::repo::client_repo::ClientRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::revenue_repo::RevenueRepository;
use crate::repo::task_repo::TaskRepository;
use crate::seed::load_seed;
use crate::storage::{KeyValueStorage, MemoryStorage, SqliteKeyValueStorage, StorageResult};
use log::{debug, info, warn};

pub struct DataStore<S: KeyValueStorage> {
    persistence: PersistenceAdapter<S>,
    data: Option<Snapshot>,
    last_persist_error: Option<PersistError>,
}

impl DataStore<MemoryStorage> {
    /// Store without any backend; state lives only as long as the store.
    pub fn in_memory() -> Self {
        Self::new(PersistenceAdapter::unavailable())
    }
}

impl DataStore<SqliteKeyValueStorage> {
    /// Opens the SQLite storage named by `config`, in memory when no path
    /// is configured.
    pub fn open(config: &StoreConfig) -> StorageResult<Self> {
        let storage = match config.db_path.as_ref() {
            Some(path) => SqliteKeyValueStorage::open(path)?,
            None => SqliteKeyValueStorage::open_in_memory()?,
        };
        Ok(Self::with_storage(storage, config))
    }
}

impl<S: KeyValueStorage> DataStore<S> {
    pub fn new(persistence: PersistenceAdapter<S>) -> Self {
        Self {
            persistence,
            data: None,
            last_persist_error: None,
        }
    }

    /// Store over `storage`, keyed by `config.storage_key`.
    pub fn with_storage(storage: S, config: &StoreConfig) -> Self {
        Self::new(PersistenceAdapter::new(storage, config.storage_key.as_str()))
    }

    /// Returns the live snapshot, materializing it on first use.
    pub fn init_store(&mut self) -> &Snapshot {
        self.data_mut()
    }

    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    /// Live snapshot without materializing it; `None` before first use.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.data.as_ref()
    }

    /// Discards the live snapshot, rebuilds it from seed and persists it.
    pub fn refresh_cache(&mut self) -> &Snapshot {
        info!("event=store_refresh module=store status=start");
        self.data = Some(load_seed());
        self.persist();
        self.data_mut()
    }

    /// Same as [`Self::refresh_cache`] without returning the snapshot.
    pub fn reset_to_seed(&mut self) {
        self.refresh_cache();
    }

    /// Legacy entry point kept for older callers; always succeeds.
    #[deprecated(note = "use refresh_cache")]
    pub fn sync_from_disk(&mut self) -> bool {
        self.refresh_cache();
        true
    }

    /// Pretty-printed JSON of the whole snapshot.
    pub fn export_data(&mut self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.data_mut())
    }

    pub fn projects(&mut self) -> ProjectRepository<'_, S> {
        ProjectRepository::new(self)
    }

    pub fn clients(&mut self) -> ClientRepository<'_, S> {
        ClientRepository::new(self)
    }

    pub fn tasks(&mut self) -> TaskRepository<'_, S> {
        TaskRepository::new(self)
    }

    pub fn activity(&mut self) -> ActivityRepository<'_, S> {
        ActivityRepository::new(self)
    }

    pub fn revenue(&mut self) -> RevenueRepository<'_, S> {
        RevenueRepository::new(self)
    }

    pub fn persistence(&self) -> &PersistenceAdapter<S> {
        &self.persistence
    }

    /// Most recent swallowed persistence failure, cleared by the next
    /// successful write.
    pub fn last_persist_error(&self) -> Option<&PersistError> {
        self.last_persist_error.as_ref()
    }

    pub(crate) fn data_mut(&mut self) -> &mut Snapshot {
        let persistence = &self.persistence;
        self.data.get_or_insert_with(|| load_initial(persistence))
    }

    /// Writes the live snapshot; failures are logged and kept for
    /// diagnostics only.
    pub(crate) fn persist(&mut self) {
        let Some(snapshot) = self.data.as_ref() else {
            return;
        };
        match self.persistence.save(snapshot) {
            Ok(()) => {
                self.last_persist_error = None;
            }
            Err(PersistError::Unavailable) => {
                debug!("event=persist module=store status=skipped reason=no_storage");
                self.last_persist_error = Some(PersistError::Unavailable);
            }
            Err(err) => {
                warn!(
                    "event=persist module=store status=error key={} error={}",
                    self.persistence.key(),
                    err
                );
                self.last_persist_error = Some(err);
            }
        }
    }
}

fn load_initial<S: KeyValueStorage>(persistence: &PersistenceAdapter<S>) -> Snapshot {
    match persistence.load() {
        Ok(Some(snapshot)) => {
            info!(
                "event=store_init module=store status=ok source=persisted projects={} tasks={}",
                snapshot.projects.len(),
                snapshot.tasks.len()
            );
            return snapshot;
        }
        Ok(None) => {
            debug!("event=store_init module=store status=miss reason=nothing_stored");
        }
        Err(PersistError::Unavailable) => {
            debug!("event=store_init module=store status=miss reason=no_storage");
        }
        Err(err) => {
            warn!("event=store_init module=store status=fallback error={err}");
        }
    }

    info!("event=store_init module=store status=ok source=seed");
    load_seed()
}
