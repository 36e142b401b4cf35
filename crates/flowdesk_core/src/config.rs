//! Store configuration.
//!
//! Values come from defaults, then environment overrides. Front ends may
//! layer their own flags on top before building a store.

use crate::persistence::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

/// Overrides the storage key under which the snapshot is kept.
pub const ENV_STORAGE_KEY: &str = "FLOWDESK_STORAGE_KEY";
/// Points the store at an on-disk SQLite file.
pub const ENV_DB_PATH: &str = "FLOWDESK_DB_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    /// `None` keeps persisted state in memory only.
    pub db_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            db_path: None,
        }
    }
}

impl StoreConfig {
    /// Defaults overlaid with `FLOWDESK_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(key) = non_empty(lookup(ENV_STORAGE_KEY)) {
            config.storage_key = key;
        }
        if let Some(path) = non_empty(lookup(ENV_DB_PATH)) {
            config.db_path = Some(PathBuf::from(path));
        }
        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
