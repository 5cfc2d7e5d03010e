//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "PVT";

/// Environment variable consulted for the log filter
pub const LOG_ENV_VAR: &str = "PVT_LOG";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "pvt.toml";

/// Default configuration directory searched below the working directory
pub const DEFAULT_CONFIG_DIR: &str = "config";
