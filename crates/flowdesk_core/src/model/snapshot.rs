//! Versioned aggregate of every collection; the unit of persistence.

use super::activity::ActivityItem;
use super::client::Client;
use super::project::Project;
use super::revenue::RevenueData;
use super::task::{PartialTask, Task};
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    pub tasks: Vec<Task>,
    pub activity: Vec<ActivityItem>,
    pub revenue: RevenueData,
}

/// Snapshot as read back from storage, before task canonicalization.
///
/// A missing `tasks` key reads as an empty list. Every other collection is
/// required; its absence makes the whole record unreadable.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StoredSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    #[serde(default)]
    pub tasks: Vec<PartialTask>,
    pub activity: Vec<ActivityItem>,
    pub revenue: RevenueData,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}
