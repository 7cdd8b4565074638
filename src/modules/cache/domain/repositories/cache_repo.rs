use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shared::errors::AppResult;

/// Key-value store with per-entry time-to-live
///
/// Values are opaque strings (aggregation results are stored as serialized JSON).
/// Concurrent writers to the same key are not coordinated: the last write wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheRepository: Send + Sync {
    /// Value stored under `key`, if present and not yet expired
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key` for `ttl`, replacing any previous value
    async fn set(&self, key: &str, value: String, ttl: Duration) -> AppResult<()>;

    /// Drop every entry
    async fn clear(&self);

    /// Get cache statistics
    async fn stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub expired_cleanups: u64,
    pub max_entries: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}
