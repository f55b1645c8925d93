//! Core task state engine for TidyHome.
//! This crate is the single source of truth for chore invariants, list
//! projection and progress metrics.

pub mod clock;
pub mod db;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use metrics::achievement::{achievement_progress, AchievementId, AchievementProgress};
pub use metrics::calendar::{completed_this_week, completed_today};
pub use metrics::stats::{
    completion_stats, overview, remaining_estimated_minutes, CompletionStats, StatsOverview,
};
pub use model::room::{default_rooms, Room, UNKNOWN_ROOM_LABEL};
pub use model::routine::{Routine, RoutineType};
pub use model::task::{
    clamp_estimated_minutes, Frequency, Priority, RoomId, Task, TaskDraft, TaskId,
    TaskValidationError,
};
pub use repo::state_repo::{RepoError, RepoResult, SqliteStateRepository, StateRepository};
pub use service::task_service::TaskService;
pub use store::{StoreSnapshot, TaskStore};
pub use view::board::{board, TaskBoard};
pub use view::projection::{project, Selection, TaskFilters};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
