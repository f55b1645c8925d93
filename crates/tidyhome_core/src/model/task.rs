//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical chore record and its enumerated attributes.
//! - Provide the typed draft used by create/edit entry points.
//! - Validate task invariants at write and read boundaries.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `completed_at.is_some() == completed` for every valid task.
//! - `estimated_minutes`, when set, is strictly positive.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a task.
///
/// Kept as a string because persisted seed data uses short numeric ids.
pub type TaskId = String;

/// Identifier of a room. Task references to rooms are weak.
pub type RoomId = String;

/// Fallback estimate applied when draft input is missing or not positive.
pub const DEFAULT_ESTIMATED_MINUTES: u32 = 10;

/// Default room preselected for new drafts.
pub const DEFAULT_DRAFT_ROOM: &str = "kitchen";

/// Task urgency. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank used by the projection: high=0, medium=1, low=2.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// How often a chore recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Canonical household chore record.
///
/// Serialized with camelCase field names; this shape is the persisted
/// record format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub frequency: Frequency,
    /// Weak reference; may point to a room that does not exist.
    pub room: RoomId,
    /// Unix epoch milliseconds. Immutable after creation.
    pub created_at: i64,
    /// Unix epoch milliseconds. Present iff `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub is_quick_task: bool,
}

impl Task {
    /// Builds a new incomplete task from a draft with a generated id.
    ///
    /// # Errors
    /// - Returns the draft validation error unchanged.
    pub fn from_draft(draft: &TaskDraft, created_at: i64) -> Result<Self, TaskValidationError> {
        Self::from_draft_with_id(Uuid::new_v4().to_string(), draft, created_at)
    }

    /// Builds a new incomplete task with a caller-provided id.
    ///
    /// Used for seed data where ids are fixed.
    pub fn from_draft_with_id(
        id: impl Into<TaskId>,
        draft: &TaskDraft,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        draft.validate()?;
        Ok(Self {
            id: id.into(),
            title: draft.title.clone(),
            completed: false,
            priority: draft.priority,
            frequency: draft.frequency,
            room: draft.room.clone(),
            created_at,
            completed_at: None,
            estimated_minutes: draft.estimated_minutes,
            is_quick_task: draft.is_quick_task,
        })
    }

    /// Flips completion and keeps `completed_at` in lockstep.
    pub fn toggle_completed(&mut self, now: i64) {
        if self.completed {
            self.completed = false;
            self.completed_at = None;
        } else {
            self.completed = true;
            self.completed_at = Some(now);
        }
    }

    /// Overwrites user-editable fields from a validated draft.
    ///
    /// Identity, creation time and completion state are preserved.
    pub fn apply_draft(&mut self, draft: &TaskDraft) -> Result<(), TaskValidationError> {
        draft.validate()?;
        self.title = draft.title.clone();
        self.priority = draft.priority;
        self.frequency = draft.frequency;
        self.room = draft.room.clone();
        self.estimated_minutes = draft.estimated_minutes;
        self.is_quick_task = draft.is_quick_task;
        Ok(())
    }

    /// Validates record invariants.
    ///
    /// # Errors
    /// - `EmptyId` when `id` is blank.
    /// - `EmptyTitle` when `title` is blank.
    /// - `ZeroEstimate` when `estimated_minutes == Some(0)`.
    /// - `CompletionMismatch` when `completed_at` disagrees with `completed`.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.estimated_minutes == Some(0) {
            return Err(TaskValidationError::ZeroEstimate);
        }
        if self.completed != self.completed_at.is_some() {
            return Err(TaskValidationError::CompletionMismatch {
                id: self.id.clone(),
                completed: self.completed,
            });
        }
        Ok(())
    }

    /// Minutes counted towards remaining time; absent estimates count as zero.
    pub fn estimate_or_zero(&self) -> u32 {
        self.estimated_minutes.unwrap_or(0)
    }
}

/// Typed form state for creating or editing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub priority: Priority,
    pub frequency: Frequency,
    pub room: RoomId,
    pub estimated_minutes: Option<u32>,
    pub is_quick_task: bool,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            priority: Priority::Medium,
            frequency: Frequency::Daily,
            room: DEFAULT_DRAFT_ROOM.to_string(),
            estimated_minutes: Some(DEFAULT_ESTIMATED_MINUTES),
            is_quick_task: false,
        }
    }
}

impl TaskDraft {
    /// Creates a draft with default attributes and the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.estimated_minutes == Some(0) {
            return Err(TaskValidationError::ZeroEstimate);
        }
        Ok(())
    }
}

/// Clamps raw estimate input to a positive minute count.
///
/// Missing, zero, negative or out-of-range input becomes
/// `DEFAULT_ESTIMATED_MINUTES`.
pub fn clamp_estimated_minutes(raw: Option<i64>) -> u32 {
    raw.and_then(|value| u32::try_from(value).ok())
        .filter(|minutes| *minutes > 0)
        .unwrap_or(DEFAULT_ESTIMATED_MINUTES)
}

/// Validation failures for task records and drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
    EmptyTitle,
    ZeroEstimate,
    CompletionMismatch { id: TaskId, completed: bool },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::ZeroEstimate => write!(f, "estimated minutes must be positive"),
            Self::CompletionMismatch { id, completed } => write!(
                f,
                "task `{id}` has completed={completed} but completedAt is {}",
                if *completed { "missing" } else { "set" }
            ),
        }
    }
}

impl Error for TaskValidationError {}

#[cfg(test)]
mod tests {
    use super::{clamp_estimated_minutes, Priority, Task, TaskDraft, TaskValidationError};

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn clamp_replaces_invalid_input_with_default() {
        assert_eq!(clamp_estimated_minutes(None), 10);
        assert_eq!(clamp_estimated_minutes(Some(0)), 10);
        assert_eq!(clamp_estimated_minutes(Some(-4)), 10);
        assert_eq!(clamp_estimated_minutes(Some(25)), 25);
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let draft = TaskDraft::titled("   ");
        assert_eq!(
            Task::from_draft(&draft, 1).unwrap_err(),
            TaskValidationError::EmptyTitle
        );
    }
}
