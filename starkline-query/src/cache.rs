//! In-memory TTL cache for query results.
//!
//! The cache is constructed explicitly and injected wherever it is needed;
//! there is no global instance. Keys are the structured query keys produced
//! by the builder modules, values are JSON results.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cache entry with TTL.
#[derive(Clone)]
struct CacheEntry {
    value: Value,
    inserted_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub max_entries: usize,
    /// Default TTL in seconds
    pub default_ttl_seconds: u64,
    /// Whether to auto-cleanup expired entries
    pub auto_cleanup: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            default_ttl_seconds: 30,
            auto_cleanup: true,
        }
    }
}

/// In-memory cache for query results.
///
/// Thread-safe and supports TTL-based expiration.
pub struct QueryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    config: CacheConfig,
}

impl QueryCache {
    /// Creates a new cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(config.max_entries)),
            config,
        }
    }

    /// Gets a cached result by query key.
    pub fn get(&self, key: &Value) -> Option<Value> {
        let entries = self.entries.read();
        entries.get(&key.to_string()).and_then(|e| {
            if e.is_expired() {
                None
            } else {
                Some(e.value.clone())
            }
        })
    }

    /// Caches a result with the default TTL.
    pub fn set(&self, key: &Value, value: Value) {
        self.set_with_ttl(key, value, Duration::from_secs(self.config.default_ttl_seconds));
    }

    /// Caches a result with a custom TTL.
    pub fn set_with_ttl(&self, key: &Value, value: Value, ttl: Duration) {
        let mut entries = self.entries.write();

        if self.config.auto_cleanup && entries.len() >= self.config.max_entries {
            entries.retain(|_, e| !e.is_expired());
        }
        if entries.len() >= self.config.max_entries {
            if let Some(oldest_key) = entries
                .iter()
                .min_by_key(|(_, e)| e.inserted_at)
                .map(|(k, _)| k.clone())
            {
                entries.remove(&oldest_key);
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Removes a cached entry.
    pub fn remove(&self, key: &Value) {
        self.entries.write().remove(&key.to_string());
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.entries.write().clear();
        tracing::debug!("query cache cleared");
    }

    /// Number of entries, including not-yet-collected expired ones.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes expired entries and returns how many were dropped.
    pub fn cleanup(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, e| !e.is_expired());
        before - entries.len()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
