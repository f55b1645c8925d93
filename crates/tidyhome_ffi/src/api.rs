//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose task list, mutation and statistics use-cases to Dart via FRB.
//! - Translate typed core results into flat string/number envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call opens the store fresh, so reads always see the latest
//!   persisted snapshot.
//! - Day/week windows use the device local time zone.

use chrono::Local;
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;
use tidyhome_core::db::open_db;
use tidyhome_core::{
    clamp_estimated_minutes, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, AchievementProgress, Frequency, Priority, Room, Routine, Selection,
    SqliteStateRepository, SystemClock, Task, TaskDraft, TaskFilters, TaskService,
};

const DB_FILE_NAME: &str = "tidyhome.sqlite3";
const ALL_SELECTION: &str = "all";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

type Service<'conn> = TaskService<SqliteStateRepository<'conn>, SystemClock>;

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// `high|medium|low`.
    pub priority: String,
    /// `daily|weekly|monthly`.
    pub frequency: String,
    pub room_id: String,
    /// Room name, or the unknown-room fallback for dangling references.
    pub room_label: String,
    pub room_icon: Option<String>,
    pub created_at: i64,
    pub completed_at: Option<i64>,
    pub estimated_minutes: Option<u32>,
    pub is_quick_task: bool,
}

/// Projected task list with its banner numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub ok: bool,
    pub items: Vec<TaskItem>,
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
    pub remaining_minutes: u64,
    pub message: String,
}

impl TaskListResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            completed: 0,
            total: 0,
            percentage: 0,
            remaining_minutes: 0,
            message: message.into(),
        }
    }
}

/// Generic mutation response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    pub ok: bool,
    /// Target or created task id; `None` when the id did not resolve.
    pub task_id: Option<String>,
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: Option<String>) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummaryResponse {
    pub ok: bool,
    pub completed_today: u32,
    pub completed_this_week: u32,
    pub total_tasks: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementItem {
    /// `daily-five|weekly-twenty|quick-five|veteran-fifty`.
    pub id: String,
    pub current: u32,
    pub threshold: u32,
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementsResponse {
    pub ok: bool,
    pub items: Vec<AchievementItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineItem {
    pub id: String,
    pub name: String,
    /// `home|work|weekend`.
    pub kind: String,
    pub task_ids: Vec<String>,
    pub active: bool,
}

/// Lists tasks for the current filter state.
///
/// Input semantics:
/// - `room` / `frequency`: `None` or `"all"` pass everything.
/// - `quick_mode`: when true, room and frequency are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_list(
    quick_mode: bool,
    room: Option<String>,
    frequency: Option<String>,
) -> TaskListResponse {
    let filters = match parse_filters(quick_mode, room, frequency) {
        Ok(filters) => filters,
        Err(message) => return TaskListResponse::failure(message),
    };

    match with_task_service(|service| {
        let view = service.board(&filters);
        let items = view
            .tasks
            .iter()
            .map(|task| to_task_item(service, task))
            .collect::<Vec<_>>();
        TaskListResponse {
            ok: true,
            message: format!("{} task(s).", items.len()),
            items,
            completed: to_u32(view.stats.completed),
            total: to_u32(view.stats.total),
            percentage: view.stats.percentage,
            remaining_minutes: view.remaining_minutes,
        }
    }) {
        Ok(response) => response,
        Err(err) => TaskListResponse::failure(format!("tasks_list failed: {err}")),
    }
}

/// Creates a task from the add-task form.
///
/// `estimated_minutes` that is missing or not positive becomes 10.
#[flutter_rust_bridge::frb(sync)]
pub fn task_create(
    title: String,
    priority: String,
    frequency: String,
    room: String,
    estimated_minutes: Option<i64>,
    is_quick_task: bool,
) -> TaskActionResponse {
    let draft = match parse_draft(
        title,
        &priority,
        &frequency,
        room,
        estimated_minutes,
        is_quick_task,
    ) {
        Ok(draft) => draft,
        Err(message) => return TaskActionResponse::failure(message),
    };

    match with_task_service(|service| service.create_task(&draft)) {
        Ok(Ok(task)) => TaskActionResponse::success("Task added.", Some(task.id)),
        Ok(Err(err)) => TaskActionResponse::failure(format!("task_create rejected: {err}")),
        Err(err) => TaskActionResponse::failure(format!("task_create failed: {err}")),
    }
}

/// Replaces the editable fields of a task; id, creation time and completion
/// state are kept. An unknown id succeeds with `task_id = None`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit(
    id: String,
    title: String,
    priority: String,
    frequency: String,
    room: String,
    estimated_minutes: Option<i64>,
    is_quick_task: bool,
) -> TaskActionResponse {
    let draft = match parse_draft(
        title,
        &priority,
        &frequency,
        room,
        estimated_minutes,
        is_quick_task,
    ) {
        Ok(draft) => draft,
        Err(message) => return TaskActionResponse::failure(message),
    };

    match with_task_service(|service| service.edit_task(&id, &draft)) {
        Ok(Ok(true)) => TaskActionResponse::success("Task updated.", Some(id)),
        Ok(Ok(false)) => TaskActionResponse::success("Nothing to update.", None),
        Ok(Err(err)) => TaskActionResponse::failure(format!("task_edit rejected: {err}")),
        Err(err) => TaskActionResponse::failure(format!("task_edit failed: {err}")),
    }
}

/// Flips completion. An unknown id succeeds with `task_id = None`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(id: String) -> TaskActionResponse {
    match with_task_service(|service| service.toggle_task(&id)) {
        Ok(Some(task)) if task.completed => {
            TaskActionResponse::success("Task completed.", Some(task.id))
        }
        Ok(Some(task)) => TaskActionResponse::success("Task reopened.", Some(task.id)),
        Ok(None) => TaskActionResponse::success("Nothing to toggle.", None),
        Err(err) => TaskActionResponse::failure(format!("task_toggle failed: {err}")),
    }
}

/// Deletes a task. An unknown id succeeds with `task_id = None`.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: String) -> TaskActionResponse {
    match with_task_service(|service| service.delete_task(&id)) {
        Ok(true) => TaskActionResponse::success("Task removed.", Some(id)),
        Ok(false) => TaskActionResponse::success("Nothing to remove.", None),
        Err(err) => TaskActionResponse::failure(format!("task_delete failed: {err}")),
    }
}

/// Statistics screen counters over the whole store.
#[flutter_rust_bridge::frb(sync)]
pub fn stats_summary() -> StatsSummaryResponse {
    match with_task_service(|service| service.overview_in(&Local)) {
        Ok(overview) => StatsSummaryResponse {
            ok: true,
            completed_today: to_u32(overview.completed_today),
            completed_this_week: to_u32(overview.completed_this_week),
            total_tasks: to_u32(overview.total_tasks),
            message: String::new(),
        },
        Err(err) => StatsSummaryResponse {
            ok: false,
            completed_today: 0,
            completed_this_week: 0,
            total_tasks: 0,
            message: format!("stats_summary failed: {err}"),
        },
    }
}

/// Achievement progress, recomputed from live task state.
#[flutter_rust_bridge::frb(sync)]
pub fn achievements_list() -> AchievementsResponse {
    match with_task_service(|service| service.achievements_in(&Local)) {
        Ok(progress) => AchievementsResponse {
            ok: true,
            items: progress.iter().map(to_achievement_item).collect(),
            message: String::new(),
        },
        Err(err) => AchievementsResponse {
            ok: false,
            items: Vec::new(),
            message: format!("achievements_list failed: {err}"),
        },
    }
}

/// Built-in rooms in display order. Does not touch storage.
#[flutter_rust_bridge::frb(sync)]
pub fn rooms_list() -> Vec<RoomItem> {
    tidyhome_core::default_rooms()
        .into_iter()
        .map(to_room_item)
        .collect()
}

/// Persisted routines; empty on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn routines_list() -> Vec<RoutineItem> {
    with_task_service(|service| {
        service
            .store()
            .routines()
            .iter()
            .map(to_routine_item)
            .collect::<Vec<_>>()
    })
    .unwrap_or_else(|err| {
        warn!("event=routines_list module=ffi status=error error={err}");
        Vec::new()
    })
}

fn parse_draft(
    title: String,
    priority: &str,
    frequency: &str,
    room: String,
    estimated_minutes: Option<i64>,
    is_quick_task: bool,
) -> Result<TaskDraft, String> {
    let priority =
        Priority::parse(priority).ok_or_else(|| format!("unknown priority `{priority}`"))?;
    let frequency =
        Frequency::parse(frequency).ok_or_else(|| format!("unknown frequency `{frequency}`"))?;
    Ok(TaskDraft {
        title: title.trim().to_string(),
        priority,
        frequency,
        room: room.trim().to_string(),
        estimated_minutes: Some(clamp_estimated_minutes(estimated_minutes)),
        is_quick_task,
    })
}

fn parse_filters(
    quick_mode: bool,
    room: Option<String>,
    frequency: Option<String>,
) -> Result<TaskFilters, String> {
    let room = normalize_selection(room);
    let frequency = match normalize_selection(frequency) {
        Some(raw) => Some(
            Frequency::parse(&raw).ok_or_else(|| format!("unknown frequency `{raw}`"))?,
        ),
        None => None,
    };

    let mut filters = TaskFilters {
        quick_mode: false,
        room: Selection::from_option(room),
        frequency: Selection::from_option(frequency),
    };
    if quick_mode {
        filters.activate_quick_mode();
    }
    Ok(filters)
}

fn normalize_selection(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty() && !raw.eq_ignore_ascii_case(ALL_SELECTION))
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TIDYHOME_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_task_service<T>(f: impl FnOnce(&mut Service<'_>) -> T) -> Result<T, String> {
    let conn = open_db(resolve_db_path()).map_err(|err| format!("DB open failed: {err}"))?;
    let repo = SqliteStateRepository::try_new(&conn)
        .map_err(|err| format!("repo init failed: {err}"))?;
    let mut service =
        TaskService::open(repo, SystemClock).map_err(|err| format!("store load failed: {err}"))?;
    Ok(f(&mut service))
}

fn to_task_item(service: &Service<'_>, task: &Task) -> TaskItem {
    let room = service.store().room(&task.room);
    TaskItem {
        id: task.id.clone(),
        title: task.title.clone(),
        completed: task.completed,
        priority: task.priority.as_str().to_string(),
        frequency: task.frequency.as_str().to_string(),
        room_id: task.room.clone(),
        room_label: service.store().room_label(&task.room).to_string(),
        room_icon: room.map(|room| room.icon.clone()),
        created_at: task.created_at,
        completed_at: task.completed_at,
        estimated_minutes: task.estimated_minutes,
        is_quick_task: task.is_quick_task,
    }
}

fn to_achievement_item(progress: &AchievementProgress) -> AchievementItem {
    AchievementItem {
        id: progress.id.as_str().to_string(),
        current: to_u32(progress.current),
        threshold: to_u32(progress.threshold),
        unlocked: progress.unlocked,
    }
}

fn to_room_item(room: Room) -> RoomItem {
    RoomItem {
        id: room.id,
        name: room.name,
        icon: room.icon,
        color: room.color,
    }
}

fn to_routine_item(routine: &Routine) -> RoutineItem {
    RoutineItem {
        id: routine.id.clone(),
        name: routine.name.clone(),
        kind: routine.kind.as_str().to_string(),
        task_ids: routine.task_ids.clone(),
        active: routine.active,
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
