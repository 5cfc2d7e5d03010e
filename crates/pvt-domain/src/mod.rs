//! Domain layer for PVT
//!
//! Core business types for tracking commissioning test progress across a
//! fleet of PV units: per-test checklists, derived unit summaries, the
//! fleet-wide rollup and the recent-activity log, plus the storage port
//! everything is persisted through.
//!
//! This crate has no I/O of its own. All persistence goes through the
//! [`ports::StateStore`] trait implemented in `pvt-providers`.

pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod keys;
pub mod ports;

pub use config::TrackerConfig;
pub use entities::{
    ActivityEntry, Checklist, GlobalRollup, StatusCounts, TestDefinition, TestRecord, TestStatus,
    UnitStatus, UnitSummary, UnitsData, completion_percentage,
};
pub use error::{Error, Result};
