//! In-memory cache of fresh analyses.
//!
//! Keyed by a SHA-256 of the item's metadata and body, so any edit to the
//! content produces a new key. Entries expire after a TTL and the oldest
//! entry is evicted once the cache is full. The map sits behind a `RwLock`
//! and the cache can be shared between analyzers through an `Arc`.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use garden_config::CacheConfig;
use garden_core::entities::{ContentItem, ContentMetadata, ImpactAnalysisResult};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::ImpactError;

#[derive(Debug, Clone)]
struct CacheEntry {
    result: ImpactAnalysisResult,
    inserted_at: Instant,
}

/// The fields an analysis depends on. The persisted `impact` block is left
/// out because fresh scoring ignores it.
#[derive(Serialize)]
struct CacheKeyInput<'a> {
    metadata: &'a ContentMetadata,
    body: &'a str,
}

#[derive(Debug)]
pub struct AnalysisCache {
    ttl: Duration,
    max_entries: usize,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl AnalysisCache {
    #[must_use]
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries: max_entries.max(1),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// `None` when caching is disabled.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        config
            .enabled
            .then(|| Self::new(config.ttl(), config.max_entries))
    }

    /// Content hash used as the cache key.
    pub fn key_for(item: &ContentItem) -> Result<String, ImpactError> {
        let input = CacheKeyInput {
            metadata: &item.metadata,
            body: &item.body,
        };
        let bytes = serde_json::to_vec(&input)?;
        Ok(format!("{:x}", Sha256::digest(&bytes)))
    }

    /// Cached result for `key`, unless missing or expired.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ImpactAnalysisResult> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| entry.inserted_at.elapsed() < self.ttl)
            .map(|entry| entry.result.clone())
    }

    /// Store a result, dropping expired entries and evicting the oldest one
    /// if the cache is still full.
    pub fn insert(&self, key: String, result: ImpactAnalysisResult) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.inserted_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                tracing::trace!(key = %oldest, "analysis cache: evicting oldest entry");
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                result,
                inserted_at: Instant::now(),
            },
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
