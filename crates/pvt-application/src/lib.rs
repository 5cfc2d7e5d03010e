//! Application layer for PVT
//!
//! Use cases around one invariant: after every mutation, the denormalized
//! rollups (`pv-<id>-progress`, `pvUnitsData`, `overallProgress`,
//! `recentActivity`) are rederived from the per-test checklists they
//! summarize. The store offers no transactions, so coherence comes from
//! recompute-from-source-of-truth, never from incremental counters.
//!
//! [`use_cases::ProgressTracker`] is the single mutation entry point;
//! [`queries::ProgressQueries`] is the read-only facade presentation
//! layers consume.

pub mod queries;
pub mod use_cases;

pub use queries::{ProgressQueries, UnitOverview};
pub use use_cases::ProgressTracker;
