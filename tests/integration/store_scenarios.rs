//! End-to-end store scenarios over the in-memory backend.
//!
//! Exercises the store contract the way a user session would: add,
//! toggle, filter, clear, with the summary projections checked at each
//! step.

use taskdeck_core::{Filter, MemoryStorage, StoreError, TaskStore, summary};

fn make_store() -> TaskStore<MemoryStorage> {
    TaskStore::load(MemoryStorage::new()).unwrap()
}

#[test]
fn buy_milk_lifecycle() {
    let mut store = make_store();
    assert_eq!(summary::summary_line(store.tasks()), "No tasks");

    let id = store.add("Buy milk").unwrap();
    assert_eq!(store.tasks().len(), 1);
    assert!(!store.tasks()[0].completed);
    assert_eq!(
        summary::summary_line(store.tasks()),
        "1 of 1 tasks remaining"
    );

    store.toggle_completed(id).unwrap();
    assert_eq!(summary::summary_line(store.tasks()), "All tasks completed!");
    assert!(summary::can_clear_completed(store.tasks()));

    store.clear_completed().unwrap();
    assert!(store.tasks().is_empty());
    assert_eq!(summary::summary_line(store.tasks()), "No tasks");
}

#[test]
fn pending_filter_shows_only_the_incomplete_task() {
    let mut store = make_store();
    let first = store.add("first").unwrap();
    let second = store.add("second").unwrap();
    store.toggle_completed(second).unwrap();

    store.set_filter(Filter::Pending);
    let visible = store.filtered_view();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, first);
}

#[test]
fn filtered_views_partition_the_collection_in_order() {
    let mut store = make_store();
    let ids: Vec<_> = (0..6).map(|i| store.add(&format!("task {i}")).unwrap()).collect();
    for id in ids.iter().step_by(2) {
        store.toggle_completed(*id).unwrap();
    }

    store.set_filter(Filter::Pending);
    let pending: Vec<_> = store.filtered_view().iter().map(|t| t.id).collect();
    store.set_filter(Filter::Completed);
    let completed: Vec<_> = store.filtered_view().iter().map(|t| t.id).collect();
    store.set_filter(Filter::All);
    let all: Vec<_> = store.filtered_view().iter().map(|t| t.id).collect();

    // All is the disjoint union of Pending and Completed, in original order.
    assert_eq!(pending.len() + completed.len(), all.len());
    assert!(pending.iter().all(|id| !completed.contains(id)));
    let mut merged: Vec<_> = pending.into_iter().chain(completed).collect();
    merged.sort_unstable();
    let mut all_sorted = all.clone();
    all_sorted.sort_unstable();
    assert_eq!(merged, all_sorted);
    assert_eq!(all, ids);
}

#[test]
fn toggle_pair_is_identity_for_every_task() {
    let mut store = make_store();
    let a = store.add("a").unwrap();
    let b = store.add("b").unwrap();
    store.toggle_completed(b).unwrap();

    let before: Vec<_> = store.tasks().iter().map(|t| t.completed).collect();
    store.toggle_completed(a).unwrap();
    store.toggle_completed(a).unwrap();
    let after: Vec<_> = store.tasks().iter().map(|t| t.completed).collect();
    assert_eq!(before, after);
}

#[test]
fn rejected_input_never_mutates() {
    let mut store = make_store();
    let id = store.add("valid").unwrap();
    let snapshot: Vec<_> = store.tasks().to_vec();

    assert!(matches!(store.add(""), Err(StoreError::TextEmpty)));
    assert!(matches!(store.add("   "), Err(StoreError::TextEmpty)));
    assert!(matches!(store.edit(id, ""), Err(StoreError::TextEmpty)));
    assert!(matches!(
        store.edit(id, " \t\n"),
        Err(StoreError::TextEmpty)
    ));

    assert_eq!(store.tasks(), snapshot.as_slice());
}
