//! Domain entities
//!
//! Each entity maps one-to-one onto a persisted value shape; the serde
//! attributes are the on-disk JSON contract and must not drift.

pub mod activity;
pub mod checklist;
pub mod rollup;
pub mod summary;

pub use activity::ActivityEntry;
pub use checklist::{Checklist, StatusCounts, TestDefinition, TestRecord, TestStatus};
pub use rollup::GlobalRollup;
pub use summary::{UnitStatus, UnitSummary, UnitsData, completion_percentage};
