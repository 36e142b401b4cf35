//! Project repository.
//!
//! # Invariants
//! - Deleting a project also deletes every task whose `project` equals the
//!   deleted id, in the same mutation and before persisting.

use super::{find_by_id, generate_id, position_of};
use crate::model::project::{Project, ProjectDraft, ProjectPatch};
use crate::model::Identified;
use crate::storage::KeyValueStorage;
use crate::store::DataStore;
use log::info;

pub struct ProjectRepository<'s, S: KeyValueStorage> {
    store: &'s mut DataStore<S>,
}

impl<'s, S: KeyValueStorage> ProjectRepository<'s, S> {
    pub(crate) fn new(store: &'s mut DataStore<S>) -> Self {
        Self { store }
    }

    pub fn list(&mut self) -> &[Project] {
        &self.store.data_mut().projects
    }

    pub fn get(&mut self, id: &str) -> Option<&Project> {
        find_by_id(&self.store.data_mut().projects, id)
    }

    pub fn add(&mut self, draft: ProjectDraft) -> Project {
        let project = draft.into_project(generate_id(Project::ID_PREFIX));
        self.store.data_mut().projects.push(project.clone());
        self.store.persist();
        project
    }

    pub fn update(&mut self, id: &str, patch: ProjectPatch) -> Option<Project> {
        let projects = &mut self.store.data_mut().projects;
        let index = position_of(projects, id)?;
        patch.apply_to(&mut projects[index]);
        let updated = projects[index].clone();
        self.store.persist();
        Some(updated)
    }

    /// Removes the project and cascades to its tasks.
    pub fn delete(&mut self, id: &str) -> bool {
        let data = self.store.data_mut();
        let Some(index) = position_of(&data.projects, id) else {
            return false;
        };
        data.projects.remove(index);
        let tasks_before = data.tasks.len();
        data.tasks.retain(|task| task.project.as_deref() != Some(id));
        let cascaded = tasks_before - data.tasks.len();

        info!("event=project_delete module=repo status=ok cascaded_tasks={cascaded}");
        self.store.persist();
        true
    }
}
