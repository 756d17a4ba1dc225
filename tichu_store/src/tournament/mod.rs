//! Tournament models and the store that caches them.
//!
//! The store hands out shared handles to three kinds of model:
//! - [`TournamentHeader`]: summary identity of a tournament, keyed by ID
//! - [`TournamentPair`]: one pair of a tournament, keyed by ID and pair number
//! - [`Tournament`]: the full aggregate, keyed by ID and wrapping its header
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tichu_store::{cache::CacheFactory, tournament::TournamentStore};
//!
//! let factory = CacheFactory::new();
//! let store = TournamentStore::new(&factory).unwrap();
//!
//! let header = store.get_or_create_tournament_header("T1");
//! assert!(!store.has_tournament("T1"));
//!
//! let tournament = store.get_or_create_tournament("T1");
//! assert!(Arc::ptr_eq(&tournament.read().unwrap().header, &header));
//! ```

pub mod models;
pub mod store;

pub use models::{
    PairNo, Shared, Tournament, TournamentHeader, TournamentId, TournamentPair, TournamentPlayer,
};
pub use store::{TournamentStore, pair_cache_key};
