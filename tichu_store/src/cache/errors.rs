//! Error types for the cache module

use crate::config::ConfigError;
use thiserror::Error;

/// Result type for cache factory operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache factory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// A cache with this id is already registered with the factory
    #[error("Cache id '{0}' is already taken")]
    IdTaken(String),

    /// Cache ids rejected before any cache was created
    #[error(transparent)]
    Config(#[from] ConfigError),
}
