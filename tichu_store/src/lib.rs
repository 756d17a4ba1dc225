//! # Tichu Store
//!
//! In-memory get-or-create cache for Tichu tournament models.
//!
//! A [`TournamentStore`] is an explicitly constructed object owning three
//! string-keyed caches (headers, pairs and tournaments). Looking up a key
//! returns the cached instance or creates, stores and returns a new one.
//! Repeated lookups of one key return the same shared handle.
//!
//! ## Core Modules
//!
//! - [`cache`]: Generic key-value cache trait, in-memory cache and cache factory
//! - [`tournament`]: Tournament models and the store
//! - [`config`]: Cache ids, loadable from environment variables
//!
//! ## Example
//!
//! ```
//! use tichu_store::{CacheFactory, StoreConfig, TournamentPlayer, TournamentStore};
//!
//! let factory = CacheFactory::new();
//! let store = TournamentStore::with_config(&factory, &StoreConfig::default()).unwrap();
//!
//! let pair = store.get_or_create_tournament_pair("T1", 1);
//! pair.write()
//!     .unwrap()
//!     .add_player(TournamentPlayer::new(Some("Ann".to_string()), None));
//!
//! let again = store.get_or_create_tournament_pair("T1", 1);
//! assert_eq!(again.read().unwrap().players.len(), 1);
//! assert_eq!(factory.info().iter().map(|c| c.size).sum::<usize>(), 1);
//! ```

/// Generic caches and the factory that creates them.
pub mod cache;
pub use cache::{CacheError, CacheFactory, CacheInfo, KeyValueCache, MemoryCache};

/// Store configuration.
pub mod config;
pub use config::{ConfigError, StoreConfig};

/// Tournament models and store.
pub mod tournament;
pub use tournament::{
    Shared, Tournament, TournamentHeader, TournamentPair, TournamentPlayer, TournamentStore,
};
