//! GFIM Storage Layer
//!
//! This crate provides the market store abstraction and its backends for the
//! GFIM daily analytics engine. It supports an embedded database (redb) for
//! real runs and an in-memory store for testing.
//!
//! # Features
//!
//! - **Raw Trade Tables**: per-date rows for the four GFIM source tables,
//!   upserted on (date, isin)
//! - **Derived Analytics**: security metrics, curve points and the daily
//!   summary, upserted on their natural keys
//! - **Alert Trail**: append-only market alerts
//! - **History Queries**: date-descending per-ISIN metric history with a
//!   row limit
//!
//! # Example
//!
//! ```rust
//! use gfim_storage::{InMemoryStore, MarketStore};
//!
//! let store = InMemoryStore::new();
//! assert!(store.is_healthy());
//! ```
//!
//! # Storage Backends
//!
//! ## RedbStore (Default)
//!
//! Uses [redb](https://crates.io/crates/redb), a pure-Rust embedded database
//! with ACID transactions. Suitable for single-process batch runs.
//!
//! ## InMemoryStore
//!
//! A simple in-memory implementation for testing and development.
//! Data is not persisted across restarts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod adapter;
mod error;
mod memory;
mod redb_store;

// Re-export core types
pub use adapter::MarketStore;
pub use error::{StorageError, StorageResult};
pub use memory::InMemoryStore;
pub use redb_store::RedbStore;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adapter::MarketStore;
    pub use crate::error::{StorageError, StorageResult};
    pub use crate::memory::InMemoryStore;
    pub use crate::redb_store::RedbStore;
}
