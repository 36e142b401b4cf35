use flowdesk_core::{
    load_seed, DataStore, KeyValueStorage, MemoryStorage, PersistError, PersistenceAdapter,
    Snapshot, SqliteKeyValueStorage, StoreConfig, TaskDraft, TaskPatch, TaskStatus,
    DEFAULT_STORAGE_KEY,
};

fn stored_snapshot(store: &DataStore<MemoryStorage>) -> Snapshot {
    let raw = store
        .persistence()
        .storage()
        .unwrap()
        .get_item(DEFAULT_STORAGE_KEY)
        .unwrap()
        .expect("snapshot should be persisted");
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn empty_storage_initializes_from_seed_without_writing() {
    let mut store = DataStore::with_storage(MemoryStorage::new(), &StoreConfig::default());
    assert_eq!(store.init_store(), &load_seed());
    assert!(store.persistence().storage().unwrap().is_empty());
}

#[test]
fn persisted_state_wins_over_seed() {
    let mut first = DataStore::with_storage(MemoryStorage::new(), &StoreConfig::default());
    let added = first.tasks().add(TaskDraft::new("carry over"));
    let persisted = stored_snapshot(&first);

    let mut seeded = MemoryStorage::new();
    seeded
        .set_item(DEFAULT_STORAGE_KEY, &serde_json::to_string(&persisted).unwrap())
        .unwrap();
    let mut second = DataStore::with_storage(seeded, &StoreConfig::default());

    assert_eq!(second.tasks().get(&added.id), Some(&added));
}

#[test]
fn persisted_tasks_are_backfilled_on_load() {
    let seed = load_seed();
    let mut value = serde_json::to_value(&seed).unwrap();
    value["tasks"] = serde_json::json!([
        { "id": "legacy-1", "title": "old shape", "status": "done" },
        { "id": "legacy-2", "priority": "urgent", "project": "p1" }
    ]);

    let mut storage = MemoryStorage::new();
    storage
        .set_item(DEFAULT_STORAGE_KEY, &value.to_string())
        .unwrap();
    let mut store = DataStore::with_storage(storage, &StoreConfig::default());

    let tasks = store.tasks().list().to_vec();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].status, TaskStatus::Done);
    assert_eq!(tasks[0].prompt, "");
    assert_eq!(tasks[1].title, "");
    assert_eq!(tasks[1].priority, flowdesk_core::Priority::Medium);
    assert_eq!(tasks[1].project.as_deref(), Some("p1"));
}

#[test]
fn missing_tasks_key_reads_as_empty_list() {
    let mut value = serde_json::to_value(load_seed()).unwrap();
    value.as_object_mut().unwrap().remove("tasks");

    let mut storage = MemoryStorage::new();
    storage
        .set_item(DEFAULT_STORAGE_KEY, &value.to_string())
        .unwrap();
    let mut store = DataStore::with_storage(storage, &StoreConfig::default());

    assert!(store.tasks().list().is_empty());
    assert_eq!(store.projects().list().len(), load_seed().projects.len());
}

#[test]
fn corrupt_persisted_state_falls_back_to_seed() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(DEFAULT_STORAGE_KEY, "{\"version\": 1, \"projects\": [")
        .unwrap();
    let mut store = DataStore::with_storage(storage, &StoreConfig::default());
    assert_eq!(store.init_store(), &load_seed());
}

#[test]
fn unavailable_storage_still_serves_and_mutates() {
    let mut store = DataStore::in_memory();
    let updated = store
        .tasks()
        .update("t1", TaskPatch::status(TaskStatus::Done))
        .unwrap();
    assert_eq!(updated.status, TaskStatus::Done);
    assert!(matches!(
        store.last_persist_error(),
        Some(PersistError::Unavailable)
    ));
}

#[test]
fn quota_failure_keeps_in_memory_state() {
    let mut store = DataStore::with_storage(MemoryStorage::with_quota(64), &StoreConfig::default());
    let added = store.tasks().add(TaskDraft::new("survives quota"));

    assert!(matches!(
        store.last_persist_error(),
        Some(PersistError::Storage(_))
    ));
    assert_eq!(store.tasks().get(&added.id), Some(&added));
    assert!(store.persistence().storage().unwrap().is_empty());
}

#[test]
fn refresh_and_reset_restore_seed_and_persist() {
    let mut store = DataStore::with_storage(MemoryStorage::new(), &StoreConfig::default());
    store.projects().delete("p1");
    store.clients().delete("c1");
    store.tasks().add(TaskDraft::new("scratch"));
    assert_ne!(store.init_store(), &load_seed());

    assert_eq!(store.refresh_cache(), &load_seed());
    assert_eq!(stored_snapshot(&store), load_seed());

    store.activity().delete("a1");
    store.reset_to_seed();
    assert_eq!(store.init_store(), &load_seed());
    assert_eq!(stored_snapshot(&store), load_seed());
    assert!(store.last_persist_error().is_none());
}

#[test]
#[allow(deprecated)]
fn sync_from_disk_reports_success() {
    let mut store = DataStore::in_memory();
    store.tasks().delete("t1");
    assert!(store.sync_from_disk());
    assert!(store.tasks().get("t1").is_some());
}

#[test]
fn export_reparses_to_live_snapshot() {
    let mut store = DataStore::in_memory();
    store
        .tasks()
        .update("t1", TaskPatch::status(TaskStatus::Done))
        .unwrap();
    store.projects().delete("p3");

    let exported = store.export_data().unwrap();
    let reparsed: Snapshot = serde_json::from_str(&exported).unwrap();
    assert_eq!(&reparsed, store.init_store());
    assert!(exported.contains('\n'), "export should be pretty-printed");
}

#[test]
fn explicit_adapter_and_sqlite_file_persist_across_stores() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        storage_key: "demo-session".to_string(),
        db_path: Some(dir.path().join("flowdesk.sqlite3")),
    };

    let mut first = DataStore::open(&config).unwrap();
    let added = first.tasks().add(TaskDraft::new("on disk"));
    drop(first);

    let mut second = DataStore::open(&config).unwrap();
    assert_eq!(second.tasks().get(&added.id), Some(&added));
    assert_eq!(second.persistence().key(), "demo-session");

    let storage = SqliteKeyValueStorage::open(config.db_path.as_ref().unwrap()).unwrap();
    let adapter = PersistenceAdapter::new(storage, "demo-session");
    let reloaded = adapter.load().unwrap().unwrap();
    assert!(reloaded.tasks.iter().any(|task| task.id == added.id));
}

#[test]
fn fractional_numbers_in_stored_state_keep_the_session() {
    let mut value = serde_json::to_value(load_seed()).unwrap();
    value["projects"][0]["progress"] = serde_json::json!(62.5);
    value["revenue"]["summary"]["pendingInvoices"] = serde_json::json!(2.5);
    value["tasks"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({ "id": "kept", "title": "saved edit" }));

    let mut storage = MemoryStorage::new();
    storage
        .set_item(DEFAULT_STORAGE_KEY, &value.to_string())
        .unwrap();
    let mut store = DataStore::with_storage(storage, &StoreConfig::default());

    assert_eq!(store.tasks().get("kept").unwrap().title, "saved edit");
    assert_eq!(store.projects().list()[0].progress, 62.5);
    assert_eq!(store.revenue().get().summary.pending_invoices, 2.5);
}

#[test]
fn configured_storage_key_is_used_for_writes() {
    let config = StoreConfig {
        storage_key: "session-b".to_string(),
        ..StoreConfig::default()
    };
    let mut store = DataStore::with_storage(MemoryStorage::new(), &config);
    assert!(store.snapshot().is_none());
    store.reset_to_seed();

    let storage = store.persistence().storage().unwrap();
    assert!(storage.get_item("session-b").unwrap().is_some());
    assert!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
    assert_eq!(store.snapshot(), Some(&load_seed()));
}
