//! Revenue repository. Revenue is a single record, not a keyed collection.

use crate::model::revenue::{RevenueData, RevenuePatch};
use crate::storage::KeyValueStorage;
use crate::store::DataStore;

pub struct RevenueRepository<'s, S: KeyValueStorage> {
    store: &'s mut DataStore<S>,
}

impl<'s, S: KeyValueStorage> RevenueRepository<'s, S> {
    pub(crate) fn new(store: &'s mut DataStore<S>) -> Self {
        Self { store }
    }

    pub fn get(&mut self) -> &RevenueData {
        &self.store.data_mut().revenue
    }

    pub fn update(&mut self, patch: RevenuePatch) -> RevenueData {
        let revenue = &mut self.store.data_mut().revenue;
        patch.apply_to(revenue);
        let updated = revenue.clone();
        self.store.persist();
        updated
    }
}
