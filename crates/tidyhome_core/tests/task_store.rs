use tidyhome_core::store::seed::seed_tasks;
use tidyhome_core::{StoreSnapshot, TaskDraft, TaskStore, TaskValidationError};

#[test]
fn create_with_empty_title_leaves_store_unchanged() {
    let mut store = seeded_store();
    let before = store.snapshot();

    for title in ["", "   ", "\t\n"] {
        let err = store.create(&TaskDraft::titled(title), 9_000).unwrap_err();
        assert_eq!(err, TaskValidationError::EmptyTitle);
    }

    assert_eq!(store.snapshot(), before);
}

#[test]
fn toggle_sets_and_clears_completed_at() {
    let mut store = seeded_store();

    let task = store.toggle("1", 5_000).unwrap();
    assert!(task.completed);
    assert_eq!(task.completed_at, Some(5_000));

    let task = store.toggle("1", 6_000).unwrap();
    assert!(!task.completed);
    assert_eq!(task.completed_at, None);
}

#[test]
fn double_toggle_restores_task() {
    let mut store = seeded_store();
    let original = store.get("4").unwrap().clone();

    store.toggle("4", 10);
    store.toggle("4", 20);

    assert_eq!(store.get("4").unwrap(), &original);
}

#[test]
fn completion_flag_tracks_timestamp_across_toggle_sequences() {
    let mut store = seeded_store();
    let sequence = ["1", "2", "1", "5", "3", "5", "5", "missing", "2", "4"];

    for (step, id) in sequence.iter().enumerate() {
        store.toggle(id, step as i64 * 1_000);
        for task in store.tasks() {
            assert_eq!(task.completed, task.completed_at.is_some(), "task {}", task.id);
        }
    }
}

#[test]
fn toggle_and_delete_unknown_id_are_noops() {
    let mut store = seeded_store();
    let before = store.snapshot();

    assert!(store.toggle("does-not-exist", 1).is_none());
    assert!(!store.delete("does-not-exist"));

    assert_eq!(store.len(), 5);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn delete_removes_only_the_target() {
    let mut store = seeded_store();

    assert!(store.delete("3"));
    assert!(!store.delete("3"));

    let ids = store.tasks().iter().map(|task| task.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["1", "2", "4", "5"]);
}

#[test]
fn created_ids_are_unique_and_appended_in_order() {
    let mut store = seeded_store();

    let first = store.create(&TaskDraft::titled("Dust shelves"), 100).unwrap();
    let second = store.create(&TaskDraft::titled("Dust shelves"), 100).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.tasks()[5].id, first.id);
    assert_eq!(store.tasks()[6].id, second.id);
}

#[test]
fn dangling_room_reference_degrades_to_unknown_label() {
    let mut store = seeded_store();
    let mut draft = TaskDraft::titled("Sweep the garage");
    draft.room = "garage".to_string();
    let task = store.create(&draft, 1).unwrap();

    assert!(store.room(&task.room).is_none());
    assert_eq!(store.room_label(&task.room), "Unknown room");
    assert_eq!(store.room_label("kitchen"), "Kitchen");
}

fn seeded_store() -> TaskStore {
    TaskStore::init(StoreSnapshot {
        tasks: seed_tasks(1_000),
        routines: Vec::new(),
    })
}
