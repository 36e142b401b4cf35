//! Task repository.
//!
//! # Invariants
//! - New tasks are canonicalized, so every field carries a value.
//! - A status transition into `done` stamps `completed_at`; a transition
//!   out of `done` clears it. The transition stamp overrides any
//!   `completed_at` carried by the same patch.

use super::{find_by_id, generate_id, position_of, remove_by_id};
use crate::clock::now_rfc3339;
use crate::model::task::{Task, TaskDraft, TaskPatch, TaskStatus};
use crate::model::Identified;
use crate::seed::canonicalize_task;
use crate::session::is_assigned_to_current_user;
use crate::storage::KeyValueStorage;
use crate::store::DataStore;

pub struct TaskRepository<'s, S: KeyValueStorage> {
    store: &'s mut DataStore<S>,
}

impl<'s, S: KeyValueStorage> TaskRepository<'s, S> {
    pub(crate) fn new(store: &'s mut DataStore<S>) -> Self {
        Self { store }
    }

    pub fn list(&mut self) -> &[Task] {
        &self.store.data_mut().tasks
    }

    pub fn get(&mut self, id: &str) -> Option<&Task> {
        find_by_id(&self.store.data_mut().tasks, id)
    }

    /// Tasks whose `project` equals `project_id`, in stored order.
    pub fn for_project(&mut self, project_id: &str) -> Vec<&Task> {
        self.store
            .data_mut()
            .tasks
            .iter()
            .filter(|task| task.project.as_deref() == Some(project_id))
            .collect()
    }

    pub fn assigned_to_current_user(&mut self) -> Vec<&Task> {
        self.store
            .data_mut()
            .tasks
            .iter()
            .filter(|task| is_assigned_to_current_user(task))
            .collect()
    }

    pub fn add(&mut self, draft: TaskDraft) -> Task {
        let task = canonicalize_task(draft.into_partial(generate_id(Task::ID_PREFIX)));
        self.store.data_mut().tasks.push(task.clone());
        self.store.persist();
        task
    }

    pub fn update(&mut self, id: &str, mut patch: TaskPatch) -> Option<Task> {
        let tasks = &mut self.store.data_mut().tasks;
        let index = position_of(tasks, id)?;

        let previous = tasks[index].status;
        match patch.status {
            Some(TaskStatus::Done) if previous != TaskStatus::Done => {
                patch.completed_at = Some(now_rfc3339());
            }
            Some(next) if next != TaskStatus::Done && previous == TaskStatus::Done => {
                patch.completed_at = Some(String::new());
            }
            _ => {}
        }

        patch.apply_to(&mut tasks[index]);
        let updated = tasks[index].clone();
        self.store.persist();
        Some(updated)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        if !remove_by_id(&mut self.store.data_mut().tasks, id) {
            return false;
        }
        self.store.persist();
        true
    }
}
