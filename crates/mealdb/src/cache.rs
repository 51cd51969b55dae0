//! In-process TTL cache for MealDB search results.
//!
//! Keys follow the `mealdb:search:<sha256(lowercase query)>` scheme from
//! [`recipebox_core::hashing::search_cache_key`]. Expired entries are
//! dropped lazily on read and swept on every write. The entry count is
//! capped; when full, the entry closest to expiry makes room.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use recipebox_core::hashing::search_cache_key;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::ExternalRecipe;

/// Default time-to-live for cached searches (24 hours).
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default maximum number of cached queries.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Backend name reported by [`CacheStats`].
pub const CACHE_BACKEND: &str = "memory";

struct CacheEntry {
    results: Vec<ExternalRecipe>,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Snapshot of cache state for the admin endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub connected: bool,
    pub backend: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_queries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Search-result cache shared by all requests.
///
/// A disabled cache misses on every lookup and refuses writes, so callers
/// never need to branch on whether caching is on.
pub struct SearchCache {
    enabled: bool,
    ttl: Duration,
    max_entries: usize,
    started_at: Instant,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl SearchCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            enabled: true,
            ttl,
            max_entries: DEFAULT_MAX_ENTRIES,
            started_at: Instant::now(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(DEFAULT_TTL)
        }
    }

    /// Cap the number of cached queries (at least one).
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    /// Cached results for `query`, if present and not expired.
    pub async fn get(&self, query: &str) -> Option<Vec<ExternalRecipe>> {
        if !self.enabled || query.is_empty() {
            return None;
        }
        let key = search_cache_key(query);
        let now = Instant::now();

        {
            let entries = self.entries.read().await;
            match entries.get(&key) {
                Some(entry) if entry.is_live(now) => {
                    tracing::debug!(query, "Search cache hit");
                    return Some(entry.results.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: drop it unless a writer refreshed it meanwhile.
        let mut entries = self.entries.write().await;
        if entries.get(&key).is_some_and(|e| !e.is_live(now)) {
            entries.remove(&key);
        }
        None
    }

    /// Store `results` for `query`. Returns `false` when nothing was stored.
    pub async fn set(&self, query: &str, results: &[ExternalRecipe]) -> bool {
        if !self.enabled || query.is_empty() {
            return false;
        }
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, e| e.is_live(now));

        let key = search_cache_key(query);
        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.expires_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                tracing::debug!("Search cache full, evicted entry closest to expiry");
            }
        }

        entries.insert(
            key,
            CacheEntry {
                results: results.to_vec(),
                expires_at: now + self.ttl,
            },
        );
        tracing::debug!(query, count = results.len(), "Cached search results");
        true
    }

    /// Drop every entry. `None` when the cache is disabled, otherwise the
    /// number of entries removed.
    pub async fn clear(&self) -> Option<usize> {
        if !self.enabled {
            return None;
        }
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        tracing::info!(removed, "Cleared search cache");
        Some(removed)
    }

    pub async fn stats(&self) -> CacheStats {
        if !self.enabled {
            return CacheStats {
                connected: false,
                backend: CACHE_BACKEND,
                cached_queries: None,
                max_entries: None,
                ttl_seconds: None,
                uptime_seconds: None,
                error: Some("Search cache is disabled".to_string()),
            };
        }

        let now = Instant::now();
        let live = self
            .entries
            .read()
            .await
            .values()
            .filter(|e| e.is_live(now))
            .count();

        CacheStats {
            connected: true,
            backend: CACHE_BACKEND,
            cached_queries: Some(live),
            max_entries: Some(self.max_entries),
            ttl_seconds: Some(self.ttl.as_secs()),
            uptime_seconds: Some(now.duration_since(self.started_at).as_secs()),
            error: None,
        }
    }

    pub fn health_check(&self) -> bool {
        self.enabled
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
