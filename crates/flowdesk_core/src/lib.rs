//! Core data layer for the FlowDesk demo.
//!
//! Seeds an in-memory snapshot from bundled fixtures, keeps it in a
//! key-value store across sessions and exposes CRUD repositories over it.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod repo;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::activity::{ActivityDraft, ActivityItem, ActivityPatch};
pub use model::client::{Client, ClientDraft, ClientPatch, ClientStatus};
pub use model::project::{Project, ProjectDraft, ProjectPatch, ProjectStatus};
pub use model::revenue::{MonthlyRevenue, RevenueData, RevenuePatch, RevenueSummary};
pub use model::snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use model::task::{PartialTask, Task, TaskDraft, TaskPatch, TaskStatus};
pub use model::Priority;
pub use persistence::{PersistError, PersistenceAdapter, DEFAULT_STORAGE_KEY};
pub use seed::{canonicalize_task, load_seed};
pub use session::{current_user, is_assigned_to_current_user, CurrentUser};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteKeyValueStorage, StorageError};
pub use store::DataStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
