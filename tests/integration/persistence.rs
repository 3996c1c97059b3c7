//! Persistence tests over the JSON file backend.
//!
//! Covers the durable-slot contract: write-through on every mutation,
//! full-collection round-trip across store instances, recovery from a
//! malformed file, and id-generator seeding after reload.

use taskdeck_core::{Filter, JsonStorage, TaskId, TaskStore};

fn storage_in(dir: &tempfile::TempDir) -> JsonStorage {
    JsonStorage::new(dir.path().join("tasks.json"))
}

#[test]
fn collection_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = TaskStore::load(storage_in(&dir)).unwrap();
    store.add("first").unwrap();
    let done = store.add("second").unwrap();
    store.toggle_completed(done).unwrap();
    drop(store);

    let reloaded = TaskStore::load(storage_in(&dir)).unwrap();
    let tasks = reloaded.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "first");
    assert!(!tasks[0].completed);
    assert_eq!(tasks[1].text, "second");
    assert!(tasks[1].completed);
}

#[test]
fn every_field_round_trips() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = TaskStore::load(storage_in(&dir)).unwrap();
    store.add("task").unwrap();
    let original = store.tasks().to_vec();
    drop(store);

    let reloaded = TaskStore::load(storage_in(&dir)).unwrap();
    assert_eq!(reloaded.tasks(), original.as_slice());
}

#[test]
fn delete_is_written_through() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = TaskStore::load(storage_in(&dir)).unwrap();
    let id = store.add("doomed").unwrap();
    store.add("kept").unwrap();
    store.delete(id).unwrap();
    drop(store);

    let reloaded = TaskStore::load(storage_in(&dir)).unwrap();
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.tasks()[0].text, "kept");
}

#[test]
fn malformed_file_recovers_as_empty_then_saves_normally() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "this is not json").unwrap();

    let mut store = TaskStore::load(JsonStorage::new(path.clone())).unwrap();
    assert!(store.tasks().is_empty());

    store.add("fresh start").unwrap();
    drop(store);

    let reloaded = TaskStore::load(JsonStorage::new(path)).unwrap();
    assert_eq!(reloaded.tasks().len(), 1);
    assert_eq!(reloaded.tasks()[0].text, "fresh start");
}

#[test]
fn ids_stay_unique_across_reloads() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = TaskStore::load(storage_in(&dir)).unwrap();
    let a = store.add("one").unwrap();
    let b = store.add("two").unwrap();
    drop(store);

    let mut reloaded = TaskStore::load(storage_in(&dir)).unwrap();
    let c = reloaded.add("three").unwrap();
    assert!(c > b && b > a);
    let mut ids: Vec<TaskId> = reloaded.tasks().iter().map(|t| t.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn filter_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = TaskStore::load(storage_in(&dir)).unwrap();
    store.add("task").unwrap();
    store.set_filter(Filter::Completed);
    drop(store);

    let reloaded = TaskStore::load(storage_in(&dir)).unwrap();
    assert_eq!(reloaded.filter(), Filter::All);
}

#[test]
fn durable_slot_is_a_camel_case_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let mut store = TaskStore::load(JsonStorage::new(path.clone())).unwrap();
    store.add("task").unwrap();
    drop(store);

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 1);
    let obj = array[0].as_object().unwrap();
    assert!(obj.contains_key("id"));
    assert!(obj.contains_key("text"));
    assert!(obj.contains_key("completed"));
    assert!(obj.contains_key("createdAt"));
}
