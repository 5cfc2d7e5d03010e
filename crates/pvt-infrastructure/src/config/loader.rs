//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables
//! and default values, merged with figment.

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use pvt_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with the `PVT_` prefix, nested keys joined
    ///    with a double underscore (e.g. `PVT_TRACKER__TOTAL_UNITS=8`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys (PVT_TRACKER__TOTAL_UNITS);
        // a single underscore would split total_units into total.units
        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .context("Failed to extract configuration")?;

        self.validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find an existing default configuration file, if any
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;
        let candidates = [
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        candidates.into_iter().find(|path| path.exists())
    }

    /// Validate a loaded configuration
    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if config.tracker.total_units == 0 {
            return Err(Error::config("tracker.total_units must be at least 1"));
        }
        parse_log_level(&config.logging.level)?;
        if config.storage.path.as_os_str().is_empty() {
            return Err(Error::config("storage.path must not be empty"));
        }
        Ok(())
    }
}
