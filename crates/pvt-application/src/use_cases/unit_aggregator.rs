//! Unit Aggregator use case
//!
//! Derives a unit's summary from its checklist and persists it twice: as a
//! decimal-string scalar under `pv-<unitId>-progress` and as an entry in
//! the shared `pvUnitsData` map. The map is what lets the global rollup
//! enumerate the fleet without re-reading every checklist.

use chrono::{DateTime, Utc};
use pvt_domain::entities::{Checklist, UnitStatus, UnitSummary, UnitsData, completion_percentage};
use pvt_domain::error::Result;
use pvt_domain::keys;
use pvt_domain::ports::StateStore;
use std::sync::Arc;
use tracing::warn;

/// Unit aggregator - owns the per-unit summary keys
#[derive(Debug, Clone)]
pub struct UnitAggregator {
    store: Arc<dyn StateStore>,
}

impl UnitAggregator {
    /// Create an aggregator over the given state store
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Derive a summary from a checklist
    ///
    /// Pure function: only completed tests count toward the percentage, so
    /// a checklist with one in-progress test still reports 0% and stays
    /// not-started. All-completed reports exactly 100%.
    pub fn recompute(checklist: &Checklist, timestamp: DateTime<Utc>) -> UnitSummary {
        let counts = checklist.status_counts();
        let percentage = completion_percentage(counts.completed, checklist.len());
        UnitSummary {
            completion_percentage: percentage,
            status: UnitStatus::from_percentage(percentage),
            completed_tests: counts.completed,
            timestamp,
        }
    }

    /// Persist a summary under both its keys
    ///
    /// The map update is read-modify-write of the whole `pvUnitsData`
    /// value; there is no partial-map write.
    pub async fn persist(&self, unit_id: &str, summary: &UnitSummary) -> Result<()> {
        self.store
            .set(
                &keys::unit_progress(unit_id),
                &summary.completion_percentage.to_string(),
            )
            .await?;

        let mut units = self.load_units_data().await;
        units.insert(unit_id.to_string(), summary.clone());
        let json = serde_json::to_string(&units)?;
        self.store.set(keys::UNITS_DATA, &json).await
    }

    /// Load the shared per-unit summary map
    ///
    /// Tolerant read: a missing or unreadable map is an empty map, which
    /// the rollup interprets as an all-not-started fleet.
    pub async fn load_units_data(&self) -> UnitsData {
        match self.store.get(keys::UNITS_DATA).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(units) => units,
                Err(err) => {
                    warn!(error = %err, "persisted unit summary map is unreadable, using empty map");
                    UnitsData::new()
                }
            },
            Ok(None) => UnitsData::new(),
            Err(err) => {
                warn!(error = %err, "failed to read unit summary map, using empty map");
                UnitsData::new()
            }
        }
    }
}
