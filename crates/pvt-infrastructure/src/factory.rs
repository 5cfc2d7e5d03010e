//! Provider wiring
//!
//! Builds the state store the application layer runs over, based on the
//! storage configuration.

use crate::config::{StorageConfig, StorageProvider};
use pvt_domain::ports::StateStore;
use pvt_providers::{FilesystemStateStore, MemoryStateStore};
use std::sync::Arc;
use tracing::debug;

/// Build a state store from storage configuration
pub fn build_state_store(config: &StorageConfig) -> Arc<dyn StateStore> {
    let store: Arc<dyn StateStore> = match config.provider {
        StorageProvider::Memory => Arc::new(MemoryStateStore::new()),
        StorageProvider::Filesystem => Arc::new(FilesystemStateStore::new(config.path.clone())),
    };
    debug!(provider = store.provider_name(), "state store initialized");
    store
}
