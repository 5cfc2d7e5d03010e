//! Global Rollup use case
//!
//! Recomputes the fleet-wide counts under `overallProgress` after every
//! mutation. The recompute enumerates every configured unit id and rederives
//! the three category counts from the full summary map, so the counts always
//! sum to the fleet size and drift is bounded to "stale until next write".

use pvt_domain::entities::{GlobalRollup, UnitStatus, UnitsData};
use pvt_domain::error::Result;
use pvt_domain::keys;
use pvt_domain::ports::StateStore;
use std::sync::Arc;
use tracing::warn;

/// Global rollup store - owns the `overallProgress` key
#[derive(Debug, Clone)]
pub struct GlobalRollupStore {
    store: Arc<dyn StateStore>,
}

impl GlobalRollupStore {
    /// Create a rollup store over the given state store
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Recompute fleet counts from the full per-unit summary map
    ///
    /// Units 1..=total are enumerated by their canonical id; a unit absent
    /// from the map counts as not-started. A unit is completed for rollup
    /// purposes only at exactly 100% - partial completion earns no
    /// fractional credit toward the completed bucket.
    pub fn recompute(units: &UnitsData, total_units: u32) -> GlobalRollup {
        let mut rollup = GlobalRollup {
            total_completion: 0,
            completed_count: 0,
            in_progress_count: 0,
            not_started_count: 0,
            total_pvs: total_units,
        };

        for seq in 1..=total_units {
            let id = keys::unit_id(seq);
            match units.get(&id).map(|summary| summary.status) {
                Some(UnitStatus::Completed) => rollup.completed_count += 1,
                Some(UnitStatus::InProgress) => rollup.in_progress_count += 1,
                Some(UnitStatus::NotStarted) | None => rollup.not_started_count += 1,
            }
        }

        rollup.with_recomputed_percentage()
    }

    /// Persist the rollup
    pub async fn persist(&self, rollup: &GlobalRollup) -> Result<()> {
        let json = serde_json::to_string(rollup)?;
        self.store.set(keys::OVERALL_PROGRESS, &json).await
    }

    /// Load the persisted rollup, defaulting to an untouched fleet
    pub async fn load(&self, total_units: u32) -> GlobalRollup {
        match self.store.get(keys::OVERALL_PROGRESS).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(rollup) => rollup,
                Err(err) => {
                    warn!(error = %err, "persisted rollup is unreadable, using default");
                    GlobalRollup::all_not_started(total_units)
                }
            },
            Ok(None) => GlobalRollup::all_not_started(total_units),
            Err(err) => {
                warn!(error = %err, "failed to read rollup, using default");
                GlobalRollup::all_not_started(total_units)
            }
        }
    }
}
