//! Unbounded in-memory cache backed by a `HashMap`.

use super::KeyValueCache;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// In-memory cache with no eviction.
///
/// Entries live until removed, cleared, or until the cache itself is dropped.
#[derive(Debug)]
pub struct MemoryCache<V> {
    id: String,
    entries: Mutex<HashMap<String, V>>,
}

impl<V> MemoryCache<V> {
    /// Create an empty cache. Prefer [`CacheFactory::create`](super::CacheFactory::create)
    /// when the cache should show up in factory statistics.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    // A panic in a caller's `make` closure leaves the map untouched, so a
    // poisoned lock still guards consistent data.
    fn entries(&self) -> MutexGuard<'_, HashMap<String, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V> KeyValueCache<V> for MemoryCache<V>
where
    V: Clone + Send,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn get(&self, key: &str) -> Option<V> {
        self.entries().get(key).cloned()
    }

    fn put(&self, key: &str, value: V) -> Option<V> {
        self.entries().insert(key.to_string(), value)
    }

    fn remove(&self, key: &str) -> Option<V> {
        self.entries().remove(key)
    }

    fn clear(&self) {
        self.entries().clear();
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn contains(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }

    fn get_or_insert_with<F>(&self, key: &str, make: F) -> V
    where
        F: FnOnce() -> V,
    {
        let mut entries = self.entries();
        if let Some(existing) = entries.get(key) {
            log::trace!("Cache '{}' hit for key '{}'", self.id, key);
            return existing.clone();
        }

        let value = make();
        entries.insert(key.to_string(), value.clone());
        log::debug!("Cache '{}' created entry for key '{}'", self.id, key);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_get_missing_key() {
        let cache: MemoryCache<u32> = MemoryCache::new("Numbers");
        assert_eq!(cache.get("missing"), None);
        assert!(!cache.contains("missing"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_returns_previous_value() {
        let cache = MemoryCache::new("Numbers");
        assert_eq!(cache.put("a", 1), None);
        assert_eq!(cache.put("a", 2), Some(1));
        assert_eq!(cache.get("a"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let cache = MemoryCache::new("Numbers");
        cache.put("a", 1);
        cache.put("b", 2);

        assert_eq!(cache.remove("a"), Some(1));
        assert_eq!(cache.remove("a"), None);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn test_get_or_insert_with_only_builds_once() {
        let cache = MemoryCache::new("Handles");
        let mut builds = 0;

        let first = cache.get_or_insert_with("key", || {
            builds += 1;
            Arc::new(String::from("value"))
        });
        let second = cache.get_or_insert_with("key", || {
            builds += 1;
            Arc::new(String::from("other"))
        });

        assert_eq!(builds, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.as_str(), "value");
    }

    #[test]
    fn test_empty_key_is_a_regular_key() {
        let cache = MemoryCache::new("Numbers");
        cache.put("", 7);
        assert_eq!(cache.get(""), Some(7));
        assert!(cache.contains(""));
    }

    #[test]
    fn test_info_reports_id_and_size() {
        let cache = MemoryCache::new("Numbers");
        cache.put("a", 1);
        cache.put("b", 2);

        let info = cache.info();
        assert_eq!(info.id, "Numbers");
        assert_eq!(info.size, 2);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let cache = Arc::new(MemoryCache::new("Numbers"));
        cache.put("a", 1);

        let poisoner = Arc::clone(&cache);
        let result = std::thread::spawn(move || {
            poisoner.get_or_insert_with("b", || panic!("builder failed"));
        })
        .join();

        assert!(result.is_err());
        assert_eq!(cache.get("a"), Some(1));
        assert!(!cache.contains("b"));
        assert_eq!(cache.get_or_insert_with("b", || 2), 2);
    }
}
