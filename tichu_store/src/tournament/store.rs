//! Get-or-create store for tournament models.

use super::models::{PairNo, Shared, Tournament, TournamentHeader, TournamentPair};
use crate::{
    cache::{CacheFactory, CacheResult, KeyValueCache, MemoryCache},
    config::StoreConfig,
};
use std::sync::{Arc, RwLock};

/// Build the pair cache key for a tournament ID and pair number.
///
/// Both parts are percent-encoded before being joined with `/`, so an ID that
/// itself contains `/` cannot produce the key of another (ID, pair) combination.
///
/// ```
/// use tichu_store::tournament::pair_cache_key;
///
/// assert_eq!(pair_cache_key("a/b", 12), "a%2Fb/12");
/// assert_eq!(pair_cache_key("a", 112), "a/112");
/// ```
pub fn pair_cache_key(id: &str, pair_no: PairNo) -> String {
    format!(
        "{}/{}",
        urlencoding::encode(id),
        urlencoding::encode(&pair_no.to_string())
    )
}

/// Create cache `id`, or destroy every id in `created` if that fails
fn create_or_roll_back<'a, V>(
    factory: &CacheFactory,
    id: &'a str,
    created: &mut Vec<&'a str>,
) -> CacheResult<Arc<MemoryCache<V>>>
where
    V: Clone + Send + 'static,
{
    match factory.create(id) {
        Ok(cache) => {
            created.push(id);
            Ok(cache)
        }
        Err(err) => {
            for earlier in created.drain(..) {
                factory.destroy(earlier);
            }
            Err(err)
        }
    }
}

/// Cache of tournament-related model objects.
///
/// Each accessor returns the cached instance for its key, creating and
/// storing it on first use. Handles for the same key are always the same
/// allocation (`Arc::ptr_eq`), never copies. Nothing is ever evicted: entries
/// live as long as the store.
///
/// IDs and pair numbers are not validated. An empty ID or pair number `0` is
/// cached like any other key.
#[derive(Debug, Clone)]
pub struct TournamentStore {
    headers: Arc<MemoryCache<Shared<TournamentHeader>>>,
    pairs: Arc<MemoryCache<Shared<TournamentPair>>>,
    tournaments: Arc<MemoryCache<Shared<Tournament>>>,
}

impl TournamentStore {
    /// Create a store whose caches use the default ids
    ///
    /// # Errors
    ///
    /// Fails if `factory` already holds a cache under one of the default ids.
    pub fn new(factory: &CacheFactory) -> CacheResult<Self> {
        Self::with_config(factory, &StoreConfig::default())
    }

    /// Create a store whose caches use the ids from `config`
    ///
    /// # Errors
    ///
    /// Fails with [`CacheError::Config`](crate::cache::CacheError::Config) if `config` does not validate, and with
    /// [`CacheError::IdTaken`](crate::cache::CacheError::IdTaken) if `factory` already holds a cache under one of
    /// the configured ids. On failure every cache this call created is
    /// destroyed again, so the factory is left as it was.
    pub fn with_config(factory: &CacheFactory, config: &StoreConfig) -> CacheResult<Self> {
        config.validate()?;

        let mut created = Vec::with_capacity(3);
        let headers = create_or_roll_back(factory, &config.header_cache_id, &mut created)?;
        let pairs = create_or_roll_back(factory, &config.pair_cache_id, &mut created)?;
        let tournaments =
            create_or_roll_back(factory, &config.tournament_cache_id, &mut created)?;

        Ok(Self {
            headers,
            pairs,
            tournaments,
        })
    }

    /// Retrieve or create the header for `id`
    pub fn get_or_create_tournament_header(&self, id: &str) -> Shared<TournamentHeader> {
        self.headers.get_or_insert_with(id, || {
            log::debug!("Creating tournament header {}", id);
            Arc::new(RwLock::new(TournamentHeader::new(id)))
        })
    }

    /// Retrieve or create pair `pair_no` (1-indexed) of tournament `id`.
    ///
    /// The returned pair does not record `id`; the ID only scopes the cache key.
    pub fn get_or_create_tournament_pair(
        &self,
        id: &str,
        pair_no: PairNo,
    ) -> Shared<TournamentPair> {
        let key = pair_cache_key(id, pair_no);
        self.pairs.get_or_insert_with(&key, || {
            log::debug!("Creating pair {} of tournament {}", pair_no, id);
            Arc::new(RwLock::new(TournamentPair::new(pair_no)))
        })
    }

    /// Whether a tournament is cached under `id`, without creating it
    pub fn has_tournament(&self, id: &str) -> bool {
        self.tournaments.contains(id)
    }

    /// Retrieve or create the tournament for `id`.
    ///
    /// A newly created tournament wraps the header returned by
    /// [`get_or_create_tournament_header`](Self::get_or_create_tournament_header)
    /// for the same ID, so both share one header instance.
    pub fn get_or_create_tournament(&self, id: &str) -> Shared<Tournament> {
        // Lock order: tournament cache, then header cache
        self.tournaments.get_or_insert_with(id, || {
            log::debug!("Creating tournament {}", id);
            let header = self.get_or_create_tournament_header(id);
            Arc::new(RwLock::new(Tournament::new(header)))
        })
    }
}
