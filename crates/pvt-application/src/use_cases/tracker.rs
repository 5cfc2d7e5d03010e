//! Progress tracker: the single mutation entry point
//!
//! Runs the toggle chain in order, awaiting each step before the next:
//! checklist write, unit summary recompute + persist, global rollup
//! recompute + persist, activity append. The rollup step re-reads the full
//! summary map rather than reusing the in-memory value, since the map write
//! and the rollup write are not atomic with respect to each other.
//!
//! There are no fatal errors on this path. A failed write leaves one
//! persisted key stale until the next toggle rederives it; the returned
//! checklist always reflects the intended new state.

use crate::use_cases::{ActivityLog, ChecklistStore, GlobalRollupStore, UnitAggregator};
use chrono::Utc;
use pvt_domain::config::TrackerConfig;
use pvt_domain::entities::{ActivityEntry, Checklist};
use pvt_domain::ports::StateStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates the mutation chain over one state store
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    checklists: ChecklistStore,
    aggregator: UnitAggregator,
    rollups: GlobalRollupStore,
    activity: ActivityLog,
    config: TrackerConfig,
}

impl ProgressTracker {
    /// Create a tracker with injected storage and fleet configuration
    pub fn new(store: Arc<dyn StateStore>, config: TrackerConfig) -> Self {
        Self {
            checklists: ChecklistStore::new(Arc::clone(&store), config.clone()),
            aggregator: UnitAggregator::new(Arc::clone(&store)),
            rollups: GlobalRollupStore::new(Arc::clone(&store)),
            activity: ActivityLog::new(store),
            config,
        }
    }

    /// Fleet configuration this tracker runs with
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Toggle one test of one unit and rederive every rollup
    ///
    /// Unknown test ids short-circuit to a no-op: nothing is written and
    /// the unchanged checklist is returned. Otherwise the full chain runs
    /// and the updated checklist is returned regardless of individual
    /// write failures (each is logged; the next toggle overwrites stale
    /// keys).
    pub async fn toggle_test(&self, unit_id: &str, test_id: &str) -> Checklist {
        let outcome = self.checklists.toggle(unit_id, test_id).await;
        let Some(new_status) = outcome.new_status else {
            return outcome.checklist;
        };

        let summary = UnitAggregator::recompute(&outcome.checklist, Utc::now());
        if let Err(err) = self.aggregator.persist(unit_id, &summary).await {
            warn!(unit_id, error = %err, "failed to persist unit summary");
        }

        // Fresh full read of the just-written map, not the in-memory copy
        let units = self.aggregator.load_units_data().await;
        let rollup = GlobalRollupStore::recompute(&units, self.config.total_units);
        if let Err(err) = self.rollups.persist(&rollup).await {
            warn!(error = %err, "failed to persist global rollup");
        }

        self.activity
            .append(ActivityEntry::status_change(
                unit_id,
                test_id,
                new_status,
                Utc::now(),
            ))
            .await;

        info!(unit_id, test_id, status = %new_status, "test status updated");
        outcome.checklist
    }
}
