//! In-memory task store.
//!
//! # Responsibility
//! - Own the authoritative task collection plus room and routine state.
//! - Apply create/toggle/edit/delete mutations as single in-memory updates.
//!
//! # Invariants
//! - Task ids are unique within the store.
//! - `completed_at.is_some() == completed` after every mutation.
//! - Unknown ids on toggle/edit/delete are no-ops, never errors.
//! - A rejected create/edit leaves the store unchanged.
//!
//! The store performs no I/O; `TaskService` mirrors its snapshot to storage.

pub mod seed;

use crate::model::room::{default_rooms, find_room, room_label, Room};
use crate::model::routine::Routine;
use crate::model::task::{Task, TaskDraft, TaskValidationError};
use std::collections::HashSet;

/// Persistable state of a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub tasks: Vec<Task>,
    pub routines: Vec<Routine>,
}

/// Explicitly owned task store.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    rooms: Vec<Room>,
    routines: Vec<Routine>,
}

impl TaskStore {
    /// Builds a store from loaded or seeded state with the default rooms.
    pub fn init(snapshot: StoreSnapshot) -> Self {
        Self {
            tasks: snapshot.tasks,
            rooms: default_rooms(),
            routines: snapshot.routines,
        }
    }

    /// Copies the persistable state out of the store.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tasks: self.tasks.clone(),
            routines: self.routines.clone(),
        }
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Resolves a task's weak room reference.
    pub fn room(&self, room_id: &str) -> Option<&Room> {
        find_room(&self.rooms, room_id)
    }

    /// Room display name with the unknown-room fallback.
    pub fn room_label(&self, room_id: &str) -> &str {
        room_label(&self.rooms, room_id)
    }

    /// Appends a new incomplete task built from `draft`.
    ///
    /// # Errors
    /// - Returns `TaskValidationError` for an invalid draft; nothing is
    ///   appended in that case.
    pub fn create(&mut self, draft: &TaskDraft, now: i64) -> Result<Task, TaskValidationError> {
        let mut task = Task::from_draft(draft, now)?;
        while self.get(&task.id).is_some() {
            task = Task::from_draft(draft, now)?;
        }
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Flips completion of the task with `id`.
    ///
    /// Returns the updated task, or `None` when `id` is unknown.
    pub fn toggle(&mut self, id: &str, now: i64) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.toggle_completed(now);
        Some(&*task)
    }

    /// Replaces editable fields of the task with `id`.
    ///
    /// Returns `Ok(false)` when `id` is unknown.
    pub fn edit(&mut self, id: &str, draft: &TaskDraft) -> Result<bool, TaskValidationError> {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.apply_draft(draft)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the task with `id`. Returns whether a task was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Overwrites the routine list.
    pub fn replace_routines(&mut self, routines: Vec<Routine>) {
        self.routines = routines;
    }
}

/// Returns the first id that appears more than once.
pub fn find_duplicate_id(tasks: &[Task]) -> Option<&str> {
    let mut seen = HashSet::new();
    tasks
        .iter()
        .map(|task| task.id.as_str())
        .find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::{find_duplicate_id, seed::seed_tasks, StoreSnapshot, TaskStore};
    use crate::model::task::TaskDraft;

    fn seeded() -> TaskStore {
        TaskStore::init(StoreSnapshot {
            tasks: seed_tasks(1_000),
            routines: Vec::new(),
        })
    }

    #[test]
    fn create_assigns_fresh_id_and_defaults() {
        let mut store = seeded();
        let task = store.create(&TaskDraft::titled("Water plants"), 2_000).unwrap();

        assert_eq!(store.len(), 6);
        assert!(!task.completed);
        assert_eq!(task.created_at, 2_000);
        assert_eq!(task.completed_at, None);
        assert!(store.get(&task.id).is_some());
        assert_eq!(find_duplicate_id(store.tasks()), None);
    }

    #[test]
    fn edit_keeps_identity_and_completion() {
        let mut store = seeded();
        store.toggle("3", 5_000);

        let mut draft = TaskDraft::titled("Vacuum every room");
        draft.is_quick_task = true;
        assert!(store.edit("3", &draft).unwrap());

        let task = store.get("3").unwrap();
        assert_eq!(task.title, "Vacuum every room");
        assert!(task.is_quick_task);
        assert!(task.completed);
        assert_eq!(task.completed_at, Some(5_000));
        assert_eq!(task.created_at, 1_000);
    }

    #[test]
    fn edit_unknown_id_is_noop() {
        let mut store = seeded();
        assert!(!store.edit("missing", &TaskDraft::titled("x")).unwrap());
    }

    #[test]
    fn find_duplicate_id_reports_repeat() {
        let mut tasks = seed_tasks(1);
        tasks.push(tasks[1].clone());
        assert_eq!(find_duplicate_id(&tasks), Some("2"));
    }
}
