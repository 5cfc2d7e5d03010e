//! Injectable tracker configuration
//!
//! The fleet size and checklist template are configuration, not module
//! constants, so tests can run against small fleets (e.g. 3 units with 2
//! tests) instead of the production 64x20.

use crate::constants::{DEFAULT_TOTAL_UNITS, default_test_template};
use crate::entities::TestDefinition;
use crate::keys;

/// Fleet size and checklist template for one tracker instance
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Number of units in the fleet, ids `01..=total_units`
    pub total_units: u32,
    /// Predefined checklist applied to every unit
    pub template: Vec<TestDefinition>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            total_units: DEFAULT_TOTAL_UNITS,
            template: default_test_template(),
        }
    }
}

impl TrackerConfig {
    /// Build a config with the default test template and a custom fleet size
    pub fn with_total_units(total_units: u32) -> Self {
        Self {
            total_units,
            ..Self::default()
        }
    }

    /// All canonical unit ids, in fleet order
    pub fn unit_ids(&self) -> impl Iterator<Item = String> + use<> {
        (1..=self.total_units).map(keys::unit_id)
    }

    /// True when the id names a unit inside the configured fleet
    pub fn contains_unit(&self, unit_id: &str) -> bool {
        (1..=self.total_units).any(|seq| keys::unit_id(seq) == unit_id)
    }
}
