//! Activity Log use case
//!
//! Bounded newest-first log of status changes under `recentActivity`.
//! Persistence failures here are never allowed to block or roll back the
//! checklist and rollup writes that precede the append.

use pvt_domain::constants::ACTIVITY_LOG_CAPACITY;
use pvt_domain::entities::ActivityEntry;
use pvt_domain::keys;
use pvt_domain::ports::StateStore;
use std::sync::Arc;
use tracing::warn;

/// Activity log - owns the `recentActivity` key
#[derive(Debug, Clone)]
pub struct ActivityLog {
    store: Arc<dyn StateStore>,
}

impl ActivityLog {
    /// Create an activity log over the given state store
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Prepend an entry and truncate to the capacity
    ///
    /// Non-fatal by contract: any read, serialize or write failure is
    /// logged and swallowed.
    pub async fn append(&self, entry: ActivityEntry) {
        let mut entries = self.recent().await;
        entries.insert(0, entry);
        entries.truncate(ACTIVITY_LOG_CAPACITY);

        match serde_json::to_string(&entries) {
            Ok(json) => {
                if let Err(err) = self.store.set(keys::RECENT_ACTIVITY, &json).await {
                    warn!(error = %err, "failed to persist activity log");
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to serialize activity log");
            }
        }
    }

    /// Load the log, newest first; missing or unreadable data is empty
    pub async fn recent(&self) -> Vec<ActivityEntry> {
        match self.store.get(keys::RECENT_ACTIVITY).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(error = %err, "persisted activity log is unreadable, using empty log");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "failed to read activity log, using empty log");
                Vec::new()
            }
        }
    }
}
