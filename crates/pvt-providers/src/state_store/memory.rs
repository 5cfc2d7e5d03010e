//! In-memory state store provider
//!
//! Stores key-value pairs in a concurrent hash map. Data is not persisted
//! and will be lost on restart. Useful for development and testing.

use async_trait::async_trait;
use dashmap::DashMap;
use pvt_domain::error::Result;
use pvt_domain::ports::StateStore;
use std::sync::Arc;

/// In-memory state store provider
///
/// All operations are infallible; the `Result` returns exist only to
/// satisfy the port contract.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStateStore {
    /// Create a new empty in-memory state store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn clear(&self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
