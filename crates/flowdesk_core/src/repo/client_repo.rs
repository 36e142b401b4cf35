//! Client repository.

use super::{find_by_id, generate_id, position_of, remove_by_id};
use crate::model::client::{Client, ClientDraft, ClientPatch};
use crate::model::Identified;
use crate::storage::KeyValueStorage;
use crate::store::DataStore;

pub struct ClientRepository<'s, S: KeyValueStorage> {
    store: &'s mut DataStore<S>,
}

impl<'s, S: KeyValueStorage> ClientRepository<'s, S> {
    pub(crate) fn new(store: &'s mut DataStore<S>) -> Self {
        Self { store }
    }

    pub fn list(&mut self) -> &[Client] {
        &self.store.data_mut().clients
    }

    pub fn get(&mut self, id: &str) -> Option<&Client> {
        find_by_id(&self.store.data_mut().clients, id)
    }

    pub fn add(&mut self, draft: ClientDraft) -> Client {
        let client = draft.into_client(generate_id(Client::ID_PREFIX));
        self.store.data_mut().clients.push(client.clone());
        self.store.persist();
        client
    }

    pub fn update(&mut self, id: &str, patch: ClientPatch) -> Option<Client> {
        let clients = &mut self.store.data_mut().clients;
        let index = position_of(clients, id)?;
        patch.apply_to(&mut clients[index]);
        let updated = clients[index].clone();
        self.store.persist();
        Some(updated)
    }

    /// Projects referencing the client are left untouched.
    pub fn delete(&mut self, id: &str) -> bool {
        if !remove_by_id(&mut self.store.data_mut().clients, id) {
            return false;
        }
        self.store.persist();
        true
    }
}
