//! Task list projection.
//!
//! Two layers are kept apart on purpose:
//! - `project` only reads `TaskFilters`; in quick mode it ignores the room
//!   and frequency selections.
//! - `TaskFilters::activate_quick_mode` resets room and frequency to `All`
//!   as a side effect of entering quick mode, so leaving quick mode shows
//!   the unfiltered list.

use crate::model::task::{Frequency, RoomId, Task};
use std::cmp::Ordering;

/// Either every value or one exact value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

/// Filter state of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilters {
    pub quick_mode: bool,
    pub room: Selection<RoomId>,
    pub frequency: Selection<Frequency>,
}

impl TaskFilters {
    /// Enters quick mode and resets room/frequency to `All`.
    pub fn activate_quick_mode(&mut self) {
        self.quick_mode = true;
        self.room = Selection::All;
        self.frequency = Selection::All;
    }

    /// Leaves quick mode; the reset selections stay reset.
    pub fn deactivate_quick_mode(&mut self) {
        self.quick_mode = false;
    }

    /// Whether `task` passes every active predicate.
    pub fn admits(&self, task: &Task) -> bool {
        if self.quick_mode {
            return task.is_quick_task;
        }
        self.room.matches(&task.room) && self.frequency.matches(&task.frequency)
    }
}

/// Filters and orders tasks for display.
///
/// The sort is stable, so tasks equal on all keys keep store order.
pub fn project(tasks: &[Task], filters: &TaskFilters) -> Vec<Task> {
    let mut projected = tasks
        .iter()
        .filter(|task| filters.admits(task))
        .cloned()
        .collect::<Vec<_>>();
    projected.sort_by(compare_for_display);
    projected
}

/// Display order: priority rank, incomplete before completed, newest first.
pub fn compare_for_display(a: &Task, b: &Task) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| a.completed.cmp(&b.completed))
        .then_with(|| b.created_at.cmp(&a.created_at))
}
