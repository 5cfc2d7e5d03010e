//! Provider implementations for the PVT storage port
//!
//! This crate implements the `pvt-domain` [`StateStore`] port against
//! concrete backends. The application layer only ever sees
//! `Arc<dyn StateStore>`.
//!
//! [`StateStore`]: pvt_domain::ports::StateStore

pub mod state_store;

pub use state_store::{FilesystemStateStore, MemoryStateStore, NullStateStore};
