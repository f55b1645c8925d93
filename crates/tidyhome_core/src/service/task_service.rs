//! Task use-case service.
//!
//! # Responsibility
//! - Load persisted state (or seed it on first run) into an owned store.
//! - Apply mutations to the store and mirror them to the repository.
//! - Serve projections and metrics from the latest store state.
//!
//! # Invariants
//! - The in-memory mutation is authoritative; a failed write is logged and
//!   never rolls it back or fails the call.
//! - A service exists only after load or seed, so every write reflects real
//!   state; an empty list after deleting the last task is written too.
//! - Projections and metrics are recomputed on every read.

use crate::clock::Clock;
use crate::metrics::achievement::{achievement_progress, AchievementProgress};
use crate::metrics::stats::{overview, StatsOverview};
use crate::model::routine::Routine;
use crate::model::task::{Task, TaskDraft, TaskValidationError};
use crate::repo::state_repo::{RepoResult, StateRepository};
use crate::store::seed::seed_tasks;
use crate::store::{StoreSnapshot, TaskStore};
use crate::view::board::{board, TaskBoard};
use crate::view::projection::TaskFilters;
use chrono::TimeZone;
use log::{info, warn};

/// Store owner wired to a repository and a clock.
pub struct TaskService<R: StateRepository, C: Clock> {
    repo: R,
    clock: C,
    store: TaskStore,
}

impl<R: StateRepository, C: Clock> TaskService<R, C> {
    /// Loads the persisted snapshot, seeding sample tasks when none exists.
    ///
    /// # Errors
    /// - Propagates read failures, including malformed records. There is no
    ///   recovery path for corrupt state.
    pub fn open(repo: R, clock: C) -> RepoResult<Self> {
        let now = clock.now_millis();
        let (tasks, seeded) = match repo.load_tasks()? {
            Some(tasks) => {
                info!(
                    "event=store_load module=service status=ok task_count={}",
                    tasks.len()
                );
                (tasks, false)
            }
            None => {
                let seeded = seed_tasks(now);
                info!(
                    "event=store_seed module=service status=ok task_count={}",
                    seeded.len()
                );
                (seeded, true)
            }
        };
        let routines = repo.load_routines()?.unwrap_or_default();

        let service = Self {
            repo,
            clock,
            store: TaskStore::init(StoreSnapshot { tasks, routines }),
        };
        if seeded {
            service.persist_tasks();
        }
        Ok(service)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Creates a task stamped with the current clock time.
    ///
    /// # Errors
    /// - `TaskValidationError` for an invalid draft; nothing is written.
    pub fn create_task(&mut self, draft: &TaskDraft) -> Result<Task, TaskValidationError> {
        let now = self.clock.now_millis();
        let task = match self.store.create(draft, now) {
            Ok(task) => task,
            Err(err) => {
                info!("event=task_create module=service status=rejected reason={err}");
                return Err(err);
            }
        };
        info!(
            "event=task_create module=service status=ok task_id={} quick={}",
            task.id, task.is_quick_task
        );
        self.persist_tasks();
        Ok(task)
    }

    /// Flips completion; returns the updated task or `None` for unknown ids.
    pub fn toggle_task(&mut self, id: &str) -> Option<Task> {
        let now = self.clock.now_millis();
        let Some(task) = self.store.toggle(id, now).cloned() else {
            info!("event=task_toggle module=service status=noop task_id={id}");
            return None;
        };
        info!(
            "event=task_toggle module=service status=ok task_id={} completed={}",
            task.id, task.completed
        );
        self.persist_tasks();
        Some(task)
    }

    /// Edits user fields; returns `Ok(false)` for unknown ids.
    pub fn edit_task(&mut self, id: &str, draft: &TaskDraft) -> Result<bool, TaskValidationError> {
        let edited = self.store.edit(id, draft)?;
        let status = if edited { "ok" } else { "noop" };
        info!("event=task_edit module=service status={status} task_id={id}");
        if edited {
            self.persist_tasks();
        }
        Ok(edited)
    }

    /// Deletes a task; returns whether one was removed.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let deleted = self.store.delete(id);
        let status = if deleted { "ok" } else { "noop" };
        info!("event=task_delete module=service status={status} task_id={id}");
        if deleted {
            self.persist_tasks();
        }
        deleted
    }

    /// Replaces the pass-through routine list.
    pub fn replace_routines(&mut self, routines: Vec<Routine>) {
        self.store.replace_routines(routines);
        self.persist_routines();
    }

    pub fn board(&self, filters: &TaskFilters) -> TaskBoard {
        board(self.store.tasks(), filters)
    }

    /// Statistics counters with day/week windows in `tz`.
    pub fn overview_in<Tz: TimeZone>(&self, tz: &Tz) -> StatsOverview {
        overview(self.store.tasks(), &self.clock.now().with_timezone(tz))
    }

    /// Achievement progress with day/week windows in `tz`.
    pub fn achievements_in<Tz: TimeZone>(&self, tz: &Tz) -> Vec<AchievementProgress> {
        achievement_progress(self.store.tasks(), &self.clock.now().with_timezone(tz))
    }

    fn persist_tasks(&self) {
        let tasks = self.store.tasks();
        match self.repo.save_tasks(tasks) {
            Ok(()) => info!(
                "event=store_save module=service status=ok record=tasks count={}",
                tasks.len()
            ),
            Err(err) => warn!(
                "event=store_save module=service status=error record=tasks error={}",
                err
            ),
        }
    }

    fn persist_routines(&self) {
        if let Err(err) = self.repo.save_routines(self.store.routines()) {
            warn!(
                "event=store_save module=service status=error record=routines error={}",
                err
            );
        }
    }
}
