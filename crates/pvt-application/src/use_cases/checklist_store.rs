//! Checklist Store use case
//!
//! Owns the canonical per-test status list for one unit. Reads fall back to
//! the configured template when nothing is persisted or the persisted value
//! is unreadable; writes are optimistic - a failed write is logged and the
//! in-memory result stands until the next toggle overwrites the stale key.

use pvt_domain::config::TrackerConfig;
use pvt_domain::entities::{Checklist, TestStatus};
use pvt_domain::keys;
use pvt_domain::ports::StateStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of a toggle attempt
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    /// The checklist after the attempt (unchanged on a no-op)
    pub checklist: Checklist,
    /// The status the test moved to, `None` when the id was not found
    pub new_status: Option<TestStatus>,
}

/// Checklist store - owns the `testItems-<unitId>` keys
#[derive(Debug, Clone)]
pub struct ChecklistStore {
    store: Arc<dyn StateStore>,
    config: TrackerConfig,
}

impl ChecklistStore {
    /// Create a checklist store over the given state store
    pub fn new(store: Arc<dyn StateStore>, config: TrackerConfig) -> Self {
        Self { store, config }
    }

    /// Fresh checklist from the configured template
    fn default_checklist(&self) -> Checklist {
        Checklist::from_template(&self.config.template)
    }

    /// Load a unit's checklist, falling back to the template
    ///
    /// Never fails the caller: a read or deserialization error is logged
    /// and the predefined default checklist is returned instead.
    pub async fn load(&self, unit_id: &str) -> Checklist {
        let key = keys::test_items(unit_id);
        match self.store.get(&key).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(checklist) => checklist,
                Err(err) => {
                    warn!(
                        unit_id,
                        error = %err,
                        "persisted checklist is unreadable, using the template"
                    );
                    self.default_checklist()
                }
            },
            Ok(None) => self.default_checklist(),
            Err(err) => {
                warn!(
                    unit_id,
                    error = %err,
                    "failed to read checklist, using the template"
                );
                self.default_checklist()
            }
        }
    }

    /// Advance one test along its status cycle and persist the checklist
    ///
    /// An unknown `test_id` is a silent no-op: nothing is written and
    /// `new_status` is `None` so the caller can skip the rollup chain.
    pub async fn toggle(&self, unit_id: &str, test_id: &str) -> ToggleOutcome {
        let mut checklist = self.load(unit_id).await;
        let Some(new_status) = checklist.toggle(test_id) else {
            debug!(unit_id, test_id, "toggle target not found, ignoring");
            return ToggleOutcome {
                checklist,
                new_status: None,
            };
        };

        let key = keys::test_items(unit_id);
        match serde_json::to_string(&checklist) {
            Ok(json) => {
                if let Err(err) = self.store.set(&key, &json).await {
                    warn!(unit_id, error = %err, "failed to persist checklist");
                }
            }
            Err(err) => {
                warn!(unit_id, error = %err, "failed to serialize checklist");
            }
        }

        ToggleOutcome {
            checklist,
            new_status: Some(new_status),
        }
    }
}
