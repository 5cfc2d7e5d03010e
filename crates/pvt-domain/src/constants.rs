//! Domain layer constants
//!
//! Fleet-wide defaults and the predefined checklist template. Both are
//! injectable through [`crate::config::TrackerConfig`]; these values are
//! only the production defaults.

use crate::entities::TestDefinition;

// ============================================================================
// FLEET CONSTANTS
// ============================================================================

/// Default number of PV units in the fleet (PV01..PV64)
pub const DEFAULT_TOTAL_UNITS: u32 = 64;

/// Maximum number of entries kept in the recent-activity log
pub const ACTIVITY_LOG_CAPACITY: usize = 10;

// ============================================================================
// CHECKLIST TEMPLATE
// ============================================================================

/// The commissioning test plan applied to every unit, in display order
pub const DEFAULT_TEST_PLAN: [(&str, &str); 20] = [
    ("test-1", "TRST_TVSS01: Equipment Hard Tag"),
    ("test-2", "TRST_TVSS02: Label Equipment Cable"),
    (
        "test-3",
        "TRST_TVSS03: TVSS Equipment Serial Number & Firmware Check",
    ),
    (
        "test-4",
        "TRST_TVSS04: System Functional Test - Physical Inspection and Configuration",
    ),
    ("test-5", "TRST_TVSS05: Camera Configuration Check"),
    (
        "test-6",
        "TRST_TVSS06: System Functional Test - Camera Live Image & Coverage",
    ),
    ("test-7", "TRST_TVSS07: NVR Configuration Check"),
    (
        "test-8",
        "TRST_TVSS08: System Functional Test - NVR Recording Check",
    ),
    ("test-9", "TRST_TVSS09: High Speed Recording Check"),
    ("test-10", "TRST_TVSS10: Wireless Client Configuration"),
    ("test-11", "TRST_TVSS11: WL Antenna VSWR Measurement"),
    ("test-12", "TRST_TVSS12: 50m WLAN Access"),
    ("test-13", "TRST_TVSS13: Microphone Audio Check"),
    (
        "test-14",
        "TRST_TVSS14: Trainborne Test (RFC 2544) for Junction Box (PV01-64)",
    ),
    ("test-15", "TRST_TVSS15: TVSS Agent Redundancy Check"),
    (
        "test-16",
        "TRST_TVSS16: Throughput Test (RFC 2544) for Junction Box (PV01-64)",
    ),
    (
        "test-17",
        "TRST_TVSS17: DRMD Port Readiness Verification (Reserved for future use)",
    ),
    ("test-18", "TRST_TVSS18: IT Security Hardening"),
    ("test-19", "TRST_TVSS19: Power ON Test"),
    ("test-20", "TRST_TVSS20: Ring Redundancy"),
];

/// Build the default checklist template as owned definitions
pub fn default_test_template() -> Vec<TestDefinition> {
    DEFAULT_TEST_PLAN
        .iter()
        .map(|(id, name)| TestDefinition {
            id: (*id).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}
