//! Activity feed entries.

use super::{deserialize_some, merge_field, Identified};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    /// Free-form tag such as `task_completed` or `payment`.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub project: Option<String>,
    pub timestamp: String,
}

impl Identified for ActivityItem {
    const ID_PREFIX: &'static str = "activity";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub project: Option<String>,
    pub timestamp: String,
}

impl ActivityDraft {
    pub(crate) fn into_item(self, id: String) -> ActivityItem {
        ActivityItem {
            id,
            kind: self.kind,
            message: self.message,
            project: self.project,
            timestamp: self.timestamp,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActivityPatch {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    #[serde(deserialize_with = "deserialize_some")]
    pub project: Option<Option<String>>,
    pub timestamp: Option<String>,
}

impl ActivityPatch {
    pub fn apply_to(self, item: &mut ActivityItem) {
        merge_field(&mut item.kind, self.kind);
        merge_field(&mut item.message, self.message);
        merge_field(&mut item.project, self.project);
        merge_field(&mut item.timestamp, self.timestamp);
    }
}
