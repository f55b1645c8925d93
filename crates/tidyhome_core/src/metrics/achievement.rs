//! Achievement progress.
//!
//! Progress is derived from live task state on every read. There is no
//! persisted "unlocked" flag, so un-completing tasks can lock an
//! achievement again.

use super::calendar::{completed_this_week, completed_today};
use crate::model::task::Task;
use chrono::{DateTime, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AchievementId {
    /// Tasks completed today.
    #[serde(rename = "daily-five")]
    DailyFive,
    /// Tasks completed since Sunday midnight.
    #[serde(rename = "weekly-twenty")]
    WeeklyTwenty,
    /// Tasks flagged for quick mode, regardless of completion.
    #[serde(rename = "quick-five")]
    QuickFive,
    /// Completed tasks, lifetime.
    #[serde(rename = "veteran-fifty")]
    VeteranFifty,
}

impl AchievementId {
    pub const ALL: [Self; 4] = [
        Self::DailyFive,
        Self::WeeklyTwenty,
        Self::QuickFive,
        Self::VeteranFifty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DailyFive => "daily-five",
            Self::WeeklyTwenty => "weekly-twenty",
            Self::QuickFive => "quick-five",
            Self::VeteranFifty => "veteran-fifty",
        }
    }

    pub fn threshold(self) -> usize {
        match self {
            Self::DailyFive => 5,
            Self::WeeklyTwenty => 20,
            Self::QuickFive => 5,
            Self::VeteranFifty => 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementProgress {
    pub id: AchievementId,
    pub current: usize,
    pub threshold: usize,
    pub unlocked: bool,
}

impl AchievementProgress {
    fn new(id: AchievementId, current: usize) -> Self {
        let threshold = id.threshold();
        Self {
            id,
            current,
            threshold,
            unlocked: current >= threshold,
        }
    }
}

/// Progress for every achievement, in `AchievementId::ALL` order.
pub fn achievement_progress<Tz: TimeZone>(
    tasks: &[Task],
    now: &DateTime<Tz>,
) -> Vec<AchievementProgress> {
    AchievementId::ALL
        .into_iter()
        .map(|id| {
            let current = match id {
                AchievementId::DailyFive => completed_today(tasks, now),
                AchievementId::WeeklyTwenty => completed_this_week(tasks, now),
                AchievementId::QuickFive => tasks.iter().filter(|task| task.is_quick_task).count(),
                AchievementId::VeteranFifty => tasks.iter().filter(|task| task.completed).count(),
            };
            AchievementProgress::new(id, current)
        })
        .collect()
}
