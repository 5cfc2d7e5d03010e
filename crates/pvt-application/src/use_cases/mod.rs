//! Use cases
//!
//! One module per component of the toggle chain, leaf-first:
//! checklist store -> unit aggregator -> global rollup -> activity log,
//! orchestrated by [`ProgressTracker`].

pub mod activity_log;
pub mod checklist_store;
pub mod global_rollup;
pub mod tracker;
pub mod unit_aggregator;

pub use activity_log::ActivityLog;
pub use checklist_store::{ChecklistStore, ToggleOutcome};
pub use global_rollup::GlobalRollupStore;
pub use tracker::ProgressTracker;
pub use unit_aggregator::UnitAggregator;
