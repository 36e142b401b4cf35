//! Activity feed repository.

use super::{find_by_id, generate_id, position_of, remove_by_id};
use crate::model::activity::{ActivityDraft, ActivityItem, ActivityPatch};
use crate::model::Identified;
use crate::storage::KeyValueStorage;
use crate::store::DataStore;

pub struct ActivityRepository<'s, S: KeyValueStorage> {
    store: &'s mut DataStore<S>,
}

impl<'s, S: KeyValueStorage> ActivityRepository<'s, S> {
    pub(crate) fn new(store: &'s mut DataStore<S>) -> Self {
        Self { store }
    }

    /// Feed entries in stored order.
    pub fn list(&mut self) -> &[ActivityItem] {
        &self.store.data_mut().activity
    }

    pub fn get(&mut self, id: &str) -> Option<&ActivityItem> {
        find_by_id(&self.store.data_mut().activity, id)
    }

    pub fn add(&mut self, draft: ActivityDraft) -> ActivityItem {
        let item = draft.into_item(generate_id(ActivityItem::ID_PREFIX));
        self.store.data_mut().activity.push(item.clone());
        self.store.persist();
        item
    }

    pub fn update(&mut self, id: &str, patch: ActivityPatch) -> Option<ActivityItem> {
        let activity = &mut self.store.data_mut().activity;
        let index = position_of(activity, id)?;
        patch.apply_to(&mut activity[index]);
        let updated = activity[index].clone();
        self.store.persist();
        Some(updated)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        if !remove_by_id(&mut self.store.data_mut().activity, id) {
            return false;
        }
        self.store.persist();
        true
    }
}
