//! Null state store provider for testing
//!
//! A state store implementation that doesn't store anything. Every read
//! misses and every write is accepted and dropped. Useful for exercising
//! the documented default-value fallbacks of the query layer.

use async_trait::async_trait;
use pvt_domain::error::Result;
use pvt_domain::ports::StateStore;

/// Null state store that doesn't store anything
///
/// # Example
///
/// ```rust
/// use pvt_providers::state_store::NullStateStore;
///
/// let store = NullStateStore::new();
/// // All operations succeed but nothing is persisted
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullStateStore;

impl NullStateStore {
    /// Create a new null state store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StateStore for NullStateStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        // Always a miss
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        // Accept the write but don't store anything
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
