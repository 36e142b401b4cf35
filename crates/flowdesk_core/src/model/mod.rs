//! Domain records for the FlowDesk demo data set.
//!
//! # Responsibility
//! - Define the canonical shapes persisted inside one [`snapshot::Snapshot`].
//! - Define draft (create) and patch (partial update) inputs per entity.
//!
//! # Invariants
//! - Wire names are camelCase and mirror the persisted JSON layout.
//! - IDs are unique strings within their own collection.
//! - Patch fields left as `None` never touch the stored record.

pub mod activity;
pub mod client;
pub mod project;
pub mod revenue;
pub mod snapshot;
pub mod task;

use serde::{Deserialize, Deserializer, Serialize};

/// Shared priority scale for projects and tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Stable wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Parses one wire value; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// Records addressable by a string id inside one collection.
pub trait Identified {
    /// Prefix used when synthesizing ids for new records.
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
}

/// Maps a present JSON value (including `null`) to `Some`.
///
/// Paired with `#[serde(default)]` this lets `Option<Option<T>>` patch
/// fields tell "absent" apart from "explicitly null".
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Overwrites `target` when the patch carries a value.
pub(crate) fn merge_field<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
