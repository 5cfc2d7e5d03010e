//! State Store Provider Implementations
//!
//! Persistence backends for the tracker's key-value state.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullStateStore`] | Testing | No-op stub for testing |
//! | [`MemoryStateStore`] | Local | Concurrent in-memory map, lost on restart |
//! | [`FilesystemStateStore`] | Local | Single JSON document on disk |
//!
//! ## Provider Selection Guide
//!
//! - **Unit tests**: `MemoryStateStore` (or `NullStateStore` for pure
//!   default-path tests)
//! - **Production**: `FilesystemStateStore`

pub mod filesystem;
pub mod memory;
pub mod null;

// Re-export for convenience
pub use filesystem::FilesystemStateStore;
pub use memory::MemoryStateStore;
pub use null::NullStateStore;
