//! Infrastructure layer for PVT
//!
//! Wires configuration, logging and the state store provider together for
//! binaries. Nothing in here carries tracker semantics; that lives in
//! `pvt-application`.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig, StorageConfig, StorageProvider};
pub use factory::build_state_store;
pub use logging::init_logging;
