//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction.
///
/// Cache operations themselves are total: a missing key is reported through
/// the return value, not as an error.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The cache was constructed with a capacity of zero
    #[error("capacity must be greater than zero")]
    InvalidCapacity,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
