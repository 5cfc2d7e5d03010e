//! Unit summary: the per-unit denormalized rollup
//!
//! A summary is a pure function of one checklist. It is persisted twice by
//! the aggregator: as a decimal-string scalar under `pv-<unitId>-progress`
//! and as an entry in the `pvUnitsData` map keyed by unit id, so the
//! fleet rollup can enumerate all units without re-reading every checklist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Completion category of a whole unit, derived from its percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitStatus {
    /// 0% complete
    NotStarted,
    /// 1..99% complete
    InProgress,
    /// Exactly 100% complete
    Completed,
}

impl UnitStatus {
    /// Derive the category from a completion percentage
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0 => Self::NotStarted,
            100 => Self::Completed,
            _ => Self::InProgress,
        }
    }

    /// Wire representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round-half-up integer percentage, guarded against an empty total
///
/// Matches the original aggregation rule: `round(100 * completed / total)`
/// with ties rounding up, and 0% when there is nothing to count.
pub fn completion_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((200 * completed + total) / (2 * total)) as u8
}

/// Denormalized completion summary for one unit
///
/// Value shape of the `pvUnitsData` map entries. Only completed tests count
/// toward the percentage; an in-progress test contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSummary {
    /// Completion percentage, 0..=100
    pub completion_percentage: u8,
    /// Category derived from the percentage
    pub status: UnitStatus,
    /// Canonical completed-test count (source of truth for displays)
    pub completed_tests: usize,
    /// When this summary was last recomputed
    pub timestamp: DateTime<Utc>,
}

/// The persisted per-unit summary map, keyed by unit id
pub type UnitsData = BTreeMap<String, UnitSummary>;
