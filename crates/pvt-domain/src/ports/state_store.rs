//! State Store Port
//!
//! Defines the contract for asynchronous string key-value persistence. The
//! store offers no transactions and no atomic multi-key writes; callers
//! that maintain several related keys must recompute derived values from a
//! fresh full read instead of trusting in-memory deltas.
//!
//! # Implementations
//!
//! - **Memory**: concurrent in-memory map, lost on restart
//! - **Filesystem**: single JSON document on disk
//! - **Null**: no-op provider for testing
//!
//! # Example
//!
//! ```ignore
//! use pvt_domain::ports::StateStore;
//!
//! store.set("testItems-05", &checklist_json).await?;
//! if let Some(json) = store.get("testItems-05").await? {
//!     let checklist: Checklist = serde_json::from_str(&json)?;
//! }
//! ```

use crate::error::Result;
use async_trait::async_trait;

/// State store port for string key-value persistence
#[async_trait]
pub trait StateStore: Send + Sync + std::fmt::Debug {
    /// Get the value stored under a key
    ///
    /// # Returns
    /// The stored string if present, `None` if the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under a key
    ///
    /// # Returns
    /// True if the key existed, false otherwise
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check whether a key has a stored value
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Remove every stored value
    async fn clear(&self) -> Result<()>;

    /// Name of this provider implementation (e.g. "memory", "filesystem")
    fn provider_name(&self) -> &str;
}
