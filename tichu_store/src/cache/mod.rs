//! Generic string-keyed caches and the factory that hands them out.
//!
//! Every cache is an unbounded in-memory map from `String` keys to values of
//! a single type. Values are usually cheap shared handles (`Arc<...>`), so a
//! lookup clones the handle rather than the model behind it.
//!
//! ## Example
//!
//! ```
//! use tichu_store::cache::{CacheFactory, KeyValueCache};
//!
//! let factory = CacheFactory::new();
//! let names = factory.create::<String>("Names").unwrap();
//!
//! names.put("1", "North".to_string());
//! assert_eq!(names.get("1").as_deref(), Some("North"));
//!
//! let info = factory.info();
//! assert_eq!(info[0].size, 1);
//! ```

pub mod errors;
pub mod factory;
pub mod memory;

pub use errors::{CacheError, CacheResult};
pub use factory::CacheFactory;
pub use memory::MemoryCache;

/// Size snapshot of a single cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheInfo {
    /// Cache id as registered with the factory
    pub id: String,
    /// Number of entries currently held
    pub size: usize,
}

/// Minimal key-value cache contract the store is built on.
///
/// Implementations must be usable through a shared reference; mutation goes
/// through interior locking.
pub trait KeyValueCache<V: Clone>: Send + Sync {
    /// Identifier the cache was created under
    fn id(&self) -> &str;

    /// Fetch a clone of the value stored under `key`
    fn get(&self, key: &str) -> Option<V>;

    /// Store `value` under `key`, returning the previous value if any
    fn put(&self, key: &str, value: V) -> Option<V>;

    /// Remove and return the value under `key`
    fn remove(&self, key: &str) -> Option<V>;

    /// Remove every entry
    fn clear(&self);

    /// Number of entries
    fn len(&self) -> usize;

    /// Fetch the value under `key`, or build it with `make` and store it.
    ///
    /// The lookup and the insert happen under one lock, so concurrent callers
    /// racing on the same missing key all observe the same value.
    ///
    /// `make` runs while that lock is held. It must not touch this cache
    /// again, or the call deadlocks.
    fn get_or_insert_with<F>(&self, key: &str, make: F) -> V
    where
        F: FnOnce() -> V;

    /// Whether a value is stored under `key`
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether the cache holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size snapshot
    fn info(&self) -> CacheInfo {
        CacheInfo {
            id: self.id().to_string(),
            size: self.len(),
        }
    }
}
