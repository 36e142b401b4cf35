//! Project records.

use super::{deserialize_some, merge_field, Identified, Priority};
use serde::{Deserialize, Serialize};

/// Pipeline stage of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Lead,
    Active,
    InProgress,
    Review,
    Completed,
}

/// One client engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Client id. Not validated against the client collection.
    pub client: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub budget: f64,
    pub spent: f64,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    /// Completion percentage.
    pub progress: f64,
    pub description: String,
    pub scope: Vec<String>,
    pub notes: String,
    /// Display color, e.g. `#6366f1`.
    pub color: String,
}

impl Identified for Project {
    const ID_PREFIX: &'static str = "proj";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Every project field except `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub client: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub budget: f64,
    pub spent: f64,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub progress: f64,
    pub description: String,
    pub scope: Vec<String>,
    pub notes: String,
    pub color: String,
}

impl ProjectDraft {
    pub(crate) fn into_project(self, id: String) -> Project {
        Project {
            id,
            title: self.title,
            client: self.client,
            status: self.status,
            priority: self.priority,
            budget: self.budget,
            spent: self.spent,
            start_date: self.start_date,
            due_date: self.due_date,
            progress: self.progress,
            description: self.description,
            scope: self.scope,
            notes: self.notes,
            color: self.color,
        }
    }
}

/// Partial project update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub client: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub budget: Option<f64>,
    pub spent: Option<f64>,
    #[serde(deserialize_with = "deserialize_some")]
    pub start_date: Option<Option<String>>,
    #[serde(deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<String>>,
    pub progress: Option<f64>,
    pub description: Option<String>,
    pub scope: Option<Vec<String>>,
    pub notes: Option<String>,
    pub color: Option<String>,
}

impl ProjectPatch {
    /// Shallow-merges this patch over `project`.
    pub fn apply_to(self, project: &mut Project) {
        merge_field(&mut project.title, self.title);
        merge_field(&mut project.client, self.client);
        merge_field(&mut project.status, self.status);
        merge_field(&mut project.priority, self.priority);
        merge_field(&mut project.budget, self.budget);
        merge_field(&mut project.spent, self.spent);
        merge_field(&mut project.start_date, self.start_date);
        merge_field(&mut project.due_date, self.due_date);
        merge_field(&mut project.progress, self.progress);
        merge_field(&mut project.description, self.description);
        merge_field(&mut project.scope, self.scope);
        merge_field(&mut project.notes, self.notes);
        merge_field(&mut project.color, self.color);
    }
}
