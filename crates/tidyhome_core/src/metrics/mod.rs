//! Derived progress metrics.
//!
//! # Responsibility
//! - Compute completion ratios and remaining time over a projected list.
//! - Compute time-windowed completion counts and achievement progress over
//!   the full task collection.
//!
//! # Invariants
//! - Every function is pure; nothing is cached or persisted.
//! - Day and week windows use local-midnight boundaries in the time zone of
//!   the `now` argument.

pub mod achievement;
pub mod calendar;
pub mod stats;
