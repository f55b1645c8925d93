//! Persistence adapter for the task store.
//!
//! # Responsibility
//! - Load and save whole task/routine collections as JSON records.
//! - Isolate SQLite and JSON details from the service layer.
//!
//! # Invariants
//! - Writes are whole-record overwrites; there are no partial updates.
//! - Read paths reject malformed or invariant-violating records instead of
//!   masking them.

pub mod state_repo;
