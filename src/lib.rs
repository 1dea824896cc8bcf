//! Tinycache - a thread-safe LRU cache with per-entry TTL expiration
//!
//! The cache holds at most a fixed number of entries. Inserting a new key at
//! capacity evicts the least recently used entry; entries inserted with a
//! TTL are removed by a per-entry watcher task unless they are overwritten,
//! removed, or evicted first.

pub mod cache;
pub mod error;

pub use cache::Cache;
pub use error::{CacheError, Result};
