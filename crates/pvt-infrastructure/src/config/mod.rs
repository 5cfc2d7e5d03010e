//! Configuration
//!
//! Serde-backed configuration types plus the figment-based loader that
//! merges defaults, a TOML file and `PVT_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, StorageConfig, StorageProvider, TrackerSettings};
