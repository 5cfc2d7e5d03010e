//! Recent-activity log entries
//!
//! One entry per status change, newest first, capped at
//! [`crate::constants::ACTIVITY_LOG_CAPACITY`] entries under the
//! `recentActivity` key.

use crate::entities::TestStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Action recorded for every toggle
pub const ACTION_STATUS_CHANGE: &str = "status_change";

/// One recorded status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Unit the change belongs to
    pub pv_id: String,
    /// Numeric part of the test id ("test-7" is stored as "7")
    pub test_id: String,
    /// Kind of change; always [`ACTION_STATUS_CHANGE`] today
    pub action: String,
    /// Status the test moved to
    pub new_status: TestStatus,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl ActivityEntry {
    /// Record a status change on one test of one unit
    pub fn status_change(
        unit_id: &str,
        test_id: &str,
        new_status: TestStatus,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            pv_id: unit_id.to_string(),
            test_id: test_id.strip_prefix("test-").unwrap_or(test_id).to_string(),
            action: ACTION_STATUS_CHANGE.to_string(),
            new_status,
            timestamp,
        }
    }
}
