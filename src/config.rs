//! Startup configuration from the environment

use std::path::PathBuf;

pub const CONTENT_ENV: &str = "PREVENTION_SORT_CONTENT";
pub const SEED_ENV: &str = "PREVENTION_SORT_SEED";
pub const LOG_ENV: &str = "PREVENTION_SORT_LOG";

/// Default `EnvFilter` directives when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "prevention_sort=info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// JSON content file; the built-in content is used when unset
    pub content_path: Option<PathBuf>,
    /// Shuffle seed for reproducible games
    pub seed: Option<u64>,
    /// Raw seed value that failed to parse, reported once logging is up
    pub invalid_seed: Option<String>,
    /// JSON log file; nothing is logged when unset since the terminal belongs to the UI
    pub log_path: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_seed = non_empty(SEED_ENV);
        let seed = raw_seed.as_deref().and_then(|s| s.trim().parse().ok());
        let invalid_seed = if seed.is_none() { raw_seed } else { None };

        Self {
            content_path: non_empty(CONTENT_ENV).map(PathBuf::from),
            seed,
            invalid_seed,
            log_path: non_empty(LOG_ENV).map(PathBuf::from),
        }
    }
}
