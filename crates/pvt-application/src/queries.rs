//! Query facade
//!
//! Read-only projections for presentation layers. No query ever fails:
//! absence of data is a valid, well-defined state and every read has a
//! documented default (template checklist, 0%, all-not-started rollup,
//! empty activity log). Queries have no side effects and may be invoked at
//! any time, e.g. from a polling refresh loop.

use crate::use_cases::{ActivityLog, ChecklistStore, GlobalRollupStore, UnitAggregator};
use pvt_domain::config::TrackerConfig;
use pvt_domain::entities::{
    ActivityEntry, Checklist, GlobalRollup, UnitStatus, UnitsData,
};
use pvt_domain::keys;
use pvt_domain::ports::StateStore;
use std::sync::Arc;
use tracing::warn;

/// One row of the fleet listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOverview {
    /// Canonical unit id ("05")
    pub id: String,
    /// Display name ("PV05")
    pub name: String,
    /// Completion percentage, 0 when never written
    pub completion_percentage: u8,
    /// Category derived from the percentage
    pub status: UnitStatus,
    /// Canonical completed-test count, when a summary exists
    pub completed_tests: Option<usize>,
}

/// Read-only views over the persisted tracker state
#[derive(Debug, Clone)]
pub struct ProgressQueries {
    store: Arc<dyn StateStore>,
    checklists: ChecklistStore,
    aggregator: UnitAggregator,
    rollups: GlobalRollupStore,
    activity: ActivityLog,
    config: TrackerConfig,
}

impl ProgressQueries {
    /// Create a facade over the given state store
    pub fn new(store: Arc<dyn StateStore>, config: TrackerConfig) -> Self {
        Self {
            checklists: ChecklistStore::new(Arc::clone(&store), config.clone()),
            aggregator: UnitAggregator::new(Arc::clone(&store)),
            rollups: GlobalRollupStore::new(Arc::clone(&store)),
            activity: ActivityLog::new(Arc::clone(&store)),
            store,
            config,
        }
    }

    /// Fleet configuration this facade runs with
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// A unit's checklist; the template with every test not-started when
    /// nothing is persisted
    pub async fn checklist(&self, unit_id: &str) -> Checklist {
        self.checklists.load(unit_id).await
    }

    /// A unit's completion percentage
    ///
    /// Prefers the `pvUnitsData` entry, falls back to the
    /// `pv-<unitId>-progress` scalar, then to 0.
    pub async fn unit_progress(&self, unit_id: &str) -> u8 {
        let units = self.aggregator.load_units_data().await;
        if let Some(summary) = units.get(unit_id) {
            return summary.completion_percentage;
        }
        self.unit_progress_scalar(unit_id).await.unwrap_or(0)
    }

    /// One row per configured unit, in fleet order
    pub async fn units_overview(&self) -> Vec<UnitOverview> {
        let units = self.aggregator.load_units_data().await;
        let mut rows = Vec::with_capacity(self.config.total_units as usize);
        for id in self.config.unit_ids() {
            let row = match units.get(&id) {
                Some(summary) => UnitOverview {
                    name: format!("PV{id}"),
                    completion_percentage: summary.completion_percentage,
                    status: summary.status,
                    completed_tests: Some(summary.completed_tests),
                    id,
                },
                None => {
                    let percentage = self.unit_progress_scalar(&id).await.unwrap_or(0);
                    UnitOverview {
                        name: format!("PV{id}"),
                        completion_percentage: percentage,
                        status: UnitStatus::from_percentage(percentage),
                        completed_tests: None,
                        id,
                    }
                }
            };
            rows.push(row);
        }
        rows
    }

    /// The shared per-unit summary map; empty when nothing is persisted
    pub async fn units_data(&self) -> UnitsData {
        self.aggregator.load_units_data().await
    }

    /// The fleet rollup; an all-not-started fleet when nothing is persisted
    pub async fn overall(&self) -> GlobalRollup {
        self.rollups.load(self.config.total_units).await
    }

    /// Recent activity, newest first; empty when nothing is persisted
    pub async fn recent_activity(&self) -> Vec<ActivityEntry> {
        self.activity.recent().await
    }

    /// Read the legacy percentage scalar for one unit
    ///
    /// Values outside 0..=100 are treated like unreadable data so the
    /// percentage bound holds on this fallback path too.
    async fn unit_progress_scalar(&self, unit_id: &str) -> Option<u8> {
        match self.store.get(&keys::unit_progress(unit_id)).await {
            Ok(Some(raw)) => match raw.trim().parse::<u8>() {
                Ok(percentage) if percentage <= 100 => Some(percentage),
                Ok(percentage) => {
                    warn!(unit_id, percentage, "persisted progress scalar is out of range");
                    None
                }
                Err(err) => {
                    warn!(unit_id, error = %err, "persisted progress scalar is unreadable");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(unit_id, error = %err, "failed to read progress scalar");
                None
            }
        }
    }
}
