//! Store configuration.
//!
//! Names the three caches the store registers with its [`CacheFactory`](crate::cache::CacheFactory).
//! Defaults can be overridden through environment variables.

/// Environment variable overriding the header cache id
pub const HEADER_CACHE_ID_VAR: &str = "TICHU_HEADER_CACHE_ID";
/// Environment variable overriding the pair cache id
pub const PAIR_CACHE_ID_VAR: &str = "TICHU_PAIR_CACHE_ID";
/// Environment variable overriding the tournament cache id
pub const TOURNAMENT_CACHE_ID_VAR: &str = "TICHU_TOURNAMENT_CACHE_ID";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Cache ids used by a [`TournamentStore`](crate::TournamentStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Id of the header cache
    pub header_cache_id: String,
    /// Id of the pair cache
    pub pair_cache_id: String,
    /// Id of the tournament cache
    pub tournament_cache_id: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            header_cache_id: "TournamentHeaders".to_string(),
            pair_cache_id: "TournamentPairs".to_string(),
            tournament_cache_id: "Tournaments".to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset
    ///
    /// # Errors
    ///
    /// Returns error if the resulting ids fail [`StoreConfig::validate`]
    pub fn from_env() -> ConfigResult<Self> {
        let defaults = Self::default();

        let config = Self {
            header_cache_id: env_or(HEADER_CACHE_ID_VAR, defaults.header_cache_id),
            pair_cache_id: env_or(PAIR_CACHE_ID_VAR, defaults.pair_cache_id),
            tournament_cache_id: env_or(TOURNAMENT_CACHE_ID_VAR, defaults.tournament_cache_id),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    ///
    /// Ids must be non-empty and pairwise distinct, since all three caches are
    /// registered with one factory.
    pub fn validate(&self) -> ConfigResult<()> {
        let ids = [
            (HEADER_CACHE_ID_VAR, &self.header_cache_id),
            (PAIR_CACHE_ID_VAR, &self.pair_cache_id),
            (TOURNAMENT_CACHE_ID_VAR, &self.tournament_cache_id),
        ];

        for (var, id) in ids {
            if id.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: "Must not be empty".to_string(),
                });
            }
        }

        for (i, (var, id)) in ids.iter().enumerate() {
            if let Some((other, _)) = ids[..i].iter().find(|(_, earlier)| earlier == id) {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: format!("Duplicates the cache id set by {}", other),
                });
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}
