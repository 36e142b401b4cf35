//! Fixed current-user identity for the demo session.

use crate::model::task::Task;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub name: &'static str,
    /// Value tasks carry in `assignee` for this user.
    pub assignee_id: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
}

const CURRENT_USER: CurrentUser = CurrentUser {
    name: "Alex Morgan",
    assignee_id: "alex",
    initials: "AM",
    role: "Freelancer",
};

pub fn current_user() -> CurrentUser {
    CURRENT_USER
}

/// Whether `task.assignee`, trimmed and lowercased, names the current
/// user by assignee id or display name.
pub fn is_assigned_to_current_user(task: &Task) -> bool {
    let user = current_user();
    let assignee = task.assignee.trim().to_lowercase();
    assignee == user.assignee_id || assignee == user.name.to_lowercase()
}
