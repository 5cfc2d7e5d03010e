//! Persisted key schema
//!
//! Every value the tracker writes lives under one of these string keys in
//! the state store. Presentation layers treat all of them as read-only;
//! the only mutation path is the toggle chain in `pvt-application`.
//!
//! | Key | Value | Writer |
//! |-----|-------|--------|
//! | `testItems-<unitId>` | checklist array | Checklist Store |
//! | `pv-<unitId>-progress` | percentage as decimal string | Unit Aggregator |
//! | `pvUnitsData` | map unitId -> unit summary | Unit Aggregator |
//! | `overallProgress` | global rollup | Global Rollup |
//! | `recentActivity` | activity entries, newest first | Activity Log |

/// Key holding the per-unit summary map
pub const UNITS_DATA: &str = "pvUnitsData";

/// Key holding the fleet-wide rollup
pub const OVERALL_PROGRESS: &str = "overallProgress";

/// Key holding the bounded recent-activity list
pub const RECENT_ACTIVITY: &str = "recentActivity";

/// Key for a unit's full checklist
pub fn test_items(unit_id: &str) -> String {
    format!("testItems-{unit_id}")
}

/// Key for a unit's completion percentage scalar
pub fn unit_progress(unit_id: &str) -> String {
    format!("pv-{unit_id}-progress")
}

/// Canonical unit id for a 1-based sequence number (zero-padded, width 2)
pub fn unit_id(seq: u32) -> String {
    format!("{seq:02}")
}
