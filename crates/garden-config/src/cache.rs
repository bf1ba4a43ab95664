//! Analysis cache settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_enabled() -> bool {
    true
}

/// 24 hours.
const fn default_ttl_secs() -> u64 {
    24 * 60 * 60
}

const fn default_max_entries() -> usize {
    512
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Entries older than this are treated as misses.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Oldest entries are evicted beyond this size.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.max_entries == 0 {
            return Err(ConfigError::invalid(
                "cache.max_entries",
                "must be at least 1 when the cache is enabled",
            ));
        }
        Ok(())
    }
}
