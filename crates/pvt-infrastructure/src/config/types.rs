//! Configuration types

use pvt_domain::config::TrackerConfig;
use pvt_domain::constants::DEFAULT_TOTAL_UNITS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// State store providers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    /// Concurrent in-memory map, lost on exit
    Memory,
    /// Single JSON document on disk
    Filesystem,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Which state store backend to use
    pub provider: StorageProvider,

    /// Path of the state document (filesystem provider only)
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProvider::Filesystem,
            path: PathBuf::from(pvt_providers::state_store::filesystem::DEFAULT_STATE_PATH),
        }
    }
}

/// Fleet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerSettings {
    /// Number of PV units in the fleet
    pub total_units: u32,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            total_units: DEFAULT_TOTAL_UNITS,
        }
    }
}

impl TrackerSettings {
    /// Expand into the domain tracker config (default test template)
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig::with_total_units(self.total_units)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fleet settings
    #[serde(default)]
    pub tracker: TrackerSettings,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_production_fleet() {
        let config = AppConfig::default();
        assert_eq!(config.tracker.total_units, 64);
        assert_eq!(config.storage.provider, StorageProvider::Filesystem);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json_format);
    }

    #[test]
    fn tracker_settings_expand_to_the_domain_config() {
        let settings = TrackerSettings { total_units: 3 };
        let tracker = settings.tracker_config();
        assert_eq!(tracker.total_units, 3);
        assert_eq!(tracker.template.len(), 20);
    }

    #[test]
    fn provider_names_parse_from_lowercase() {
        let parsed: StorageProvider = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(parsed, StorageProvider::Memory);
    }
}
