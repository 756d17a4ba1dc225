//! Factory for named caches.

use super::{
    CacheInfo, KeyValueCache,
    errors::{CacheError, CacheResult},
    memory::MemoryCache,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Type-erased view of a registered cache, used for statistics only
trait RegisteredCache: Send + Sync {
    fn snapshot(&self) -> CacheInfo;
}

impl<V> RegisteredCache for MemoryCache<V>
where
    V: Clone + Send,
{
    fn snapshot(&self) -> CacheInfo {
        KeyValueCache::info(self)
    }
}

/// Creates named caches and keeps a registry of them.
///
/// Cache ids are unique per factory: creating a second cache under a taken id
/// fails with [`CacheError::IdTaken`]. The factory holds a reference to each
/// cache it created so it can report sizes through [`CacheFactory::info`].
#[derive(Default)]
pub struct CacheFactory {
    caches: Mutex<HashMap<String, Arc<dyn RegisteredCache>>>,
}

impl CacheFactory {
    /// Create a factory with no registered caches
    pub fn new() -> Self {
        Self::default()
    }

    fn caches(&self) -> MutexGuard<'_, HashMap<String, Arc<dyn RegisteredCache>>> {
        self.caches.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create and register an empty cache under `id`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::IdTaken`] if a cache with the same id is already
    /// registered.
    pub fn create<V>(&self, id: &str) -> CacheResult<Arc<MemoryCache<V>>>
    where
        V: Clone + Send + 'static,
    {
        let mut caches = self.caches();
        if caches.contains_key(id) {
            log::warn!("Refusing to create cache '{}': id already taken", id);
            return Err(CacheError::IdTaken(id.to_string()));
        }

        let cache = Arc::new(MemoryCache::new(id));
        caches.insert(id.to_string(), cache.clone() as Arc<dyn RegisteredCache>);
        log::info!("Created cache '{}'", id);

        Ok(cache)
    }

    /// Whether a cache is registered under `id`
    pub fn contains(&self, id: &str) -> bool {
        self.caches().contains_key(id)
    }

    /// Unregister the cache under `id`, freeing the id for reuse.
    ///
    /// Existing handles to the cache stay valid; the factory simply stops
    /// tracking it. Returns `false` if nothing was registered under `id`.
    pub fn destroy(&self, id: &str) -> bool {
        let removed = self.caches().remove(id).is_some();
        if removed {
            log::info!("Destroyed cache '{}'", id);
        }
        removed
    }

    /// Size snapshot of every registered cache, ordered by id
    pub fn info(&self) -> Vec<CacheInfo> {
        let mut info: Vec<CacheInfo> = self
            .caches()
            .values()
            .map(|cache| cache.snapshot())
            .collect();
        info.sort_by(|a, b| a.id.cmp(&b.id));
        info
    }
}

impl std::fmt::Debug for CacheFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheFactory")
            .field("caches", &self.info())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registers_cache() {
        let factory = CacheFactory::new();
        let cache = factory.create::<u32>("Numbers").unwrap();

        assert_eq!(cache.id(), "Numbers");
        assert!(factory.contains("Numbers"));
        assert!(!factory.contains("Letters"));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let factory = CacheFactory::new();
        factory.create::<u32>("Numbers").unwrap();

        let err = factory.create::<String>("Numbers").unwrap_err();
        assert_eq!(err, CacheError::IdTaken("Numbers".to_string()));
        assert_eq!(err.to_string(), "Cache id 'Numbers' is already taken");
    }

    #[test]
    fn test_info_tracks_sizes_sorted_by_id() {
        let factory = CacheFactory::new();
        let numbers = factory.create::<u32>("Numbers").unwrap();
        let letters = factory.create::<char>("Letters").unwrap();

        numbers.put("one", 1);
        numbers.put("two", 2);
        letters.put("a", 'a');

        let info = factory.info();
        assert_eq!(
            info,
            vec![
                CacheInfo {
                    id: "Letters".to_string(),
                    size: 1
                },
                CacheInfo {
                    id: "Numbers".to_string(),
                    size: 2
                },
            ]
        );
    }

    #[test]
    fn test_destroy_frees_id() {
        let factory = CacheFactory::new();
        let old = factory.create::<u32>("Numbers").unwrap();
        old.put("one", 1);

        assert!(factory.destroy("Numbers"));
        assert!(!factory.destroy("Numbers"));
        assert!(factory.info().is_empty());

        // Old handle keeps working, new cache starts empty
        assert_eq!(old.get("one"), Some(1));
        let fresh = factory.create::<u32>("Numbers").unwrap();
        assert!(fresh.is_empty());
    }
}
