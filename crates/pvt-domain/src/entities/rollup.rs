//! Fleet-wide rollup entity
//!
//! Persisted under the `overallProgress` key. Category counts always sum to
//! the configured fleet size; a unit with no persisted summary counts as
//! not-started. The rollup is recomputed from the full `pvUnitsData` map on
//! every mutation, never patched incrementally.

use crate::entities::completion_percentage;
use serde::{Deserialize, Serialize};

/// Fleet-wide completion counts and percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalRollup {
    /// Completed units over total units, round-half-up percentage
    pub total_completion: u8,
    /// Units at exactly 100%
    pub completed_count: u32,
    /// Units strictly between 0% and 100%
    pub in_progress_count: u32,
    /// Units at 0%, including units never written
    pub not_started_count: u32,
    /// Configured fleet size
    #[serde(rename = "totalPVs")]
    pub total_pvs: u32,
}

impl GlobalRollup {
    /// Rollup for a fleet nobody has touched yet
    pub fn all_not_started(total_units: u32) -> Self {
        Self {
            total_completion: 0,
            completed_count: 0,
            in_progress_count: 0,
            not_started_count: total_units,
            total_pvs: total_units,
        }
    }

    /// Recompute the fleet percentage from the completed count
    ///
    /// Only fully completed units contribute; partial completion earns no
    /// fractional credit.
    pub fn with_recomputed_percentage(mut self) -> Self {
        self.total_completion =
            completion_percentage(self.completed_count as usize, self.total_pvs as usize);
        self
    }
}
