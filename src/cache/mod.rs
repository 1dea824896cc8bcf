//! Cache Module
//!
//! Provides a thread-safe in-memory cache with LRU eviction and per-entry
//! TTL expiration.

mod entry;
mod list;
mod shared;
mod store;
mod watcher;


// Re-export the public handle
pub use shared::Cache;
