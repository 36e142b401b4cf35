//! Seed loader: builds fresh snapshots from embedded fixtures.
//!
//! # Responsibility
//! - Parse the bundled fixture JSON once per process.
//! - Hand out independent deep copies as version-1 snapshots.
//! - Canonicalize task records so every field carries a value.
//!
//! # Invariants
//! - Snapshots returned by [`load_seed`] never share state with each other
//!   or with the parsed fixtures.
//! - Canonicalization is pure and idempotent.

use crate::model::activity::ActivityItem;
use crate::model::client::Client;
use crate::model::project::Project;
use crate::model::revenue::RevenueData;
use crate::model::snapshot::{Snapshot, SNAPSHOT_VERSION};
use crate::model::task::{PartialTask, Task, TaskStatus};
use crate::model::Priority;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

const PROJECTS_JSON: &str = include_str!("fixtures/projects.json");
const CLIENTS_JSON: &str = include_str!("fixtures/clients.json");
const TASKS_JSON: &str = include_str!("fixtures/tasks.json");
const ACTIVITY_JSON: &str = include_str!("fixtures/activity.json");
const REVENUE_JSON: &str = include_str!("fixtures/revenue.json");

struct SeedFixtures {
    projects: Vec<Project>,
    clients: Vec<Client>,
    tasks: Vec<PartialTask>,
    activity: Vec<ActivityItem>,
    revenue: RevenueData,
}

// Fixtures are compiled in; a parse failure is a build defect, and the
// unit tests below parse every file.
static FIXTURES: Lazy<SeedFixtures> = Lazy::new(|| SeedFixtures {
    projects: parse_fixture("projects.json", PROJECTS_JSON),
    clients: parse_fixture("clients.json", CLIENTS_JSON),
    tasks: parse_fixture("tasks.json", TASKS_JSON),
    activity: parse_fixture("activity.json", ACTIVITY_JSON),
    revenue: parse_fixture("revenue.json", REVENUE_JSON),
});

fn parse_fixture<T: DeserializeOwned>(name: &str, raw: &str) -> T {
    serde_json::from_str(raw)
        .unwrap_or_else(|err| panic!("embedded fixture `{name}` is invalid: {err}"))
}

/// Builds a fresh version-1 snapshot from the seed fixtures.
pub fn load_seed() -> Snapshot {
    let fixtures = &*FIXTURES;
    Snapshot {
        version: SNAPSHOT_VERSION,
        projects: fixtures.projects.clone(),
        clients: fixtures.clients.clone(),
        tasks: fixtures
            .tasks
            .iter()
            .cloned()
            .map(canonicalize_task)
            .collect(),
        activity: fixtures.activity.clone(),
        revenue: fixtures.revenue.clone(),
    }
}

/// Fills every missing task field with its default.
///
/// Text fields default to an empty string, `project` to `None`, priority
/// to `medium` and status to `todo`. Empty or unknown enum values also
/// fall back to the default.
pub fn canonicalize_task(partial: PartialTask) -> Task {
    Task {
        id: partial.id.unwrap_or_default(),
        title: partial.title.unwrap_or_default(),
        project: partial.project,
        priority: partial
            .priority
            .as_deref()
            .and_then(Priority::parse)
            .unwrap_or_default(),
        status: partial
            .status
            .as_deref()
            .and_then(TaskStatus::parse)
            .unwrap_or_default(),
        due_date: partial.due_date.unwrap_or_default(),
        description: partial.description.unwrap_or_default(),
        prompt: partial.prompt.unwrap_or_default(),
        assignee: partial.assignee.unwrap_or_default(),
        completed_at: partial.completed_at.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::{canonicalize_task, load_seed};
    use crate::model::task::{PartialTask, TaskStatus};
    use crate::model::Priority;

    #[test]
    fn every_fixture_parses() {
        let snapshot = load_seed();
        assert_eq!(snapshot.version, 1);
        assert!(!snapshot.projects.is_empty());
        assert!(!snapshot.clients.is_empty());
        assert!(!snapshot.tasks.is_empty());
        assert!(!snapshot.activity.is_empty());
        assert!(!snapshot.revenue.monthly.is_empty());
    }

    #[test]
    fn canonicalize_fills_defaults() {
        let task = canonicalize_task(PartialTask::default());
        assert_eq!(task.id, "");
        assert_eq!(task.title, "");
        assert_eq!(task.project, None);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.completed_at, "");
    }

    #[test]
    fn canonicalize_degrades_unknown_enum_values() {
        let task = canonicalize_task(PartialTask {
            priority: Some(String::new()),
            status: Some("blocked".to_string()),
            ..PartialTask::default()
        });
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn canonicalize_keeps_present_values() {
        let task = canonicalize_task(PartialTask {
            id: Some("t42".to_string()),
            project: Some("p1".to_string()),
            priority: Some("high".to_string()),
            status: Some("done".to_string()),
            completed_at: Some("2025-01-01T00:00:00Z".to_string()),
            ..PartialTask::default()
        });
        assert_eq!(task.id, "t42");
        assert_eq!(task.project.as_deref(), Some("p1"));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.completed_at, "2025-01-01T00:00:00Z");
    }
}
