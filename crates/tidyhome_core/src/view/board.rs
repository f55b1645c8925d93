//! Task tab read model: the projected list with its banner numbers.

use super::projection::{project, TaskFilters};
use crate::metrics::stats::{completion_stats, remaining_estimated_minutes, CompletionStats};
use crate::model::task::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    pub tasks: Vec<Task>,
    /// Computed over `tasks`, not over the whole store.
    pub stats: CompletionStats,
    /// Time left on incomplete `tasks`; the quick-mode banner shows this.
    pub remaining_minutes: u64,
}

pub fn board(tasks: &[Task], filters: &TaskFilters) -> TaskBoard {
    let projected = project(tasks, filters);
    let stats = completion_stats(&projected);
    let remaining_minutes = remaining_estimated_minutes(&projected);
    TaskBoard {
        tasks: projected,
        stats,
        remaining_minutes,
    }
}
