//! Storage Ports
//!
//! Contracts the application layer depends on. Implementations live in
//! `pvt-providers`.

/// State store port
pub mod state_store;

pub use state_store::StateStore;
