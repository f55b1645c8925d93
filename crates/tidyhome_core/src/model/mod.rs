//! Household domain model.
//!
//! # Responsibility
//! - Define the canonical task/room/routine records shared by the store,
//!   the projection engine and the metrics engine.
//! - Own field-level validation for task records and drafts.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - `completed_at` is present if and only if `completed` is true.
//! - Room references are weak; nothing here resolves them.

pub mod room;
pub mod routine;
pub mod task;
