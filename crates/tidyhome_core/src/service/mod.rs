//! Core use-case services.
//!
//! # Responsibility
//! - Own the task store for the lifetime of a session.
//! - Keep FFI callers decoupled from storage and clock details.

pub mod task_service;
