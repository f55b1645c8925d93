//! Read-side projections over the task store.
//!
//! # Responsibility
//! - Turn the full task collection into the filtered, ordered work queue.
//! - Hold the filter state and its quick-mode transitions.
//!
//! # Invariants
//! - Projection is pure and recomputed on every read.
//! - Ordering is priority rank, then incomplete first, then newest first.

pub mod board;
pub mod projection;
