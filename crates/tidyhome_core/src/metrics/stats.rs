//! Completion counters for the projected list and the statistics screen.

use super::calendar::{completed_this_week, completed_today};
use crate::model::task::Task;
use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// Completed/total counts with a rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    /// `round(completed / total * 100)`, or 0 for an empty list.
    pub percentage: u32,
}

/// Counters shown on the statistics screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsOverview {
    pub completed_today: usize,
    pub completed_this_week: usize,
    pub total_tasks: usize,
}

pub fn completion_stats(projected: &[Task]) -> CompletionStats {
    let total = projected.len();
    let completed = projected.iter().filter(|task| task.completed).count();
    CompletionStats {
        completed,
        total,
        percentage: rounded_percentage(completed, total),
    }
}

/// Sum of estimates over incomplete projected tasks; missing estimates are 0.
pub fn remaining_estimated_minutes(projected: &[Task]) -> u64 {
    projected
        .iter()
        .filter(|task| !task.completed)
        .map(|task| u64::from(task.estimate_or_zero()))
        .sum()
}

pub fn overview<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> StatsOverview {
    StatsOverview {
        completed_today: completed_today(tasks, now),
        completed_this_week: completed_this_week(tasks, now),
        total_tasks: tasks.len(),
    }
}

fn rounded_percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Half-up rounding in integer space: (200 * part + total) / (2 * total).
    let numerator = 200 * part as u64 + total as u64;
    (numerator / (2 * total as u64)) as u32
}
