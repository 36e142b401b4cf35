//! Task records and their tolerant persisted form.
//!
//! # Invariants
//! - `completed_at` is non-empty exactly when the task entered `done` through
//!   a status transition (or was stored that way).
//! - `project` may reference a project that no longer exists.

use super::{deserialize_some, merge_field, Identified, Priority};
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Owning project id, `None` for standalone tasks.
    pub project: Option<String>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: String,
    pub description: String,
    /// Free-text prompt attached to the task.
    pub prompt: String,
    pub assignee: String,
    /// RFC 3339 timestamp, empty string while not completed.
    pub completed_at: String,
}

impl Identified for Task {
    const ID_PREFIX: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Task shape as found in fixtures or previously persisted state.
///
/// Every field may be missing; enum fields are read as raw strings so an
/// unknown value degrades to the default instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialTask {
    pub id: Option<String>,
    pub title: Option<String>,
    pub project: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<String>,
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub assignee: Option<String>,
    pub completed_at: Option<String>,
}

/// Input for creating a task. Only `title` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDraft {
    pub title: String,
    pub project: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<String>,
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub assignee: Option<String>,
    pub completed_at: Option<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub(crate) fn into_partial(self, id: String) -> PartialTask {
        PartialTask {
            id: Some(id),
            title: Some(self.title),
            project: self.project,
            priority: self.priority.map(|priority| priority.as_str().to_string()),
            status: self.status.map(|status| status.as_str().to_string()),
            due_date: self.due_date,
            description: self.description,
            prompt: self.prompt,
            assignee: self.assignee,
            completed_at: self.completed_at,
        }
    }
}

/// Partial task update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPatch {
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_some")]
    pub project: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<String>,
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub assignee: Option<String>,
    pub completed_at: Option<String>,
}

impl TaskPatch {
    /// Patch that only moves the task to `status`.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply_to(self, task: &mut Task) {
        merge_field(&mut task.title, self.title);
        merge_field(&mut task.project, self.project);
        merge_field(&mut task.priority, self.priority);
        merge_field(&mut task.status, self.status);
        merge_field(&mut task.due_date, self.due_date);
        merge_field(&mut task.description, self.description);
        merge_field(&mut task.prompt, self.prompt);
        merge_field(&mut task.assignee, self.assignee);
        merge_field(&mut task.completed_at, self.completed_at);
    }
}

#[cfg(test)]
mod tests {
    use super::{PartialTask, TaskPatch, TaskStatus};

    #[test]
    fn partial_task_accepts_sparse_json() {
        let partial: PartialTask =
            serde_json::from_str(r#"{"id": "t9", "status": "blocked", "extra": 1}"#).unwrap();
        assert_eq!(partial.id.as_deref(), Some("t9"));
        assert_eq!(partial.status.as_deref(), Some("blocked"));
        assert_eq!(partial.title, None);
    }

    #[test]
    fn task_patch_reads_explicit_null_project() {
        let patch: TaskPatch = serde_json::from_str(r#"{"project": null}"#).unwrap();
        assert_eq!(patch.project, Some(None));
        let empty: TaskPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TaskPatch::default());
    }

    #[test]
    fn status_round_trips_through_parse() {
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
    }
}
