use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::modules::cache::domain::repositories::{CacheRepository, CacheStats};
use crate::shared::errors::AppResult;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Cached value with its own TTL
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// In-memory TTL cache with background cleanup
///
/// Expired entries are never returned: they are dropped on read and swept
/// every five minutes by a task spawned on first use.
#[derive(Debug)]
pub struct MemoryCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    cleanups: Arc<AtomicU64>,
    cleanup_task_started: Arc<AtomicBool>,
    max_entries: usize,
}

impl MemoryCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
            cleanups: Arc::new(AtomicU64::new(0)),
            cleanup_task_started: Arc::new(AtomicBool::new(false)),
            max_entries: max_entries.max(1),
        }
    }

    /// Number of entries currently held, including ones not yet swept
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ensure cleanup task is started (idempotent)
    fn ensure_cleanup_task_started(&self) {
        if tokio::runtime::Handle::try_current().is_err() {
            return;
        }

        if self
            .cleanup_task_started
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return;
        }

        let entries = Arc::downgrade(&self.entries);
        let cleanups = self.cleanups.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
            interval.tick().await;

            loop {
                interval.tick().await;

                // Stop once the cache itself has been dropped
                let Some(entries) = entries.upgrade() else {
                    break;
                };

                let removed = purge_expired(&entries);
                if removed > 0 {
                    cleanups.fetch_add(removed as u64, Ordering::Relaxed);
                    log::debug!("Cleaned up {} expired cache entries", removed);
                }
            }
        });

        log::debug!("Background cache cleanup task started");
    }

    /// Evict the oldest entries once the cache is full, down to 90% of capacity
    fn evict_oldest_entries(&self) {
        let current_size = self.entries.len();
        if current_size < self.max_entries {
            return;
        }

        let mut by_age: Vec<(String, Instant)> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().created_at))
            .collect();
        by_age.sort_by_key(|(_, created_at)| *created_at);

        let target_size = (self.max_entries * 9) / 10;
        let to_evict = current_size.saturating_sub(target_size).max(1);

        for (key, _) in by_age.into_iter().take(to_evict) {
            self.entries.remove(&key);
        }

        log::debug!(
            "Evicted {} old cache entries (was {}, now {})",
            to_evict,
            current_size,
            self.entries.len()
        );
    }
}

fn purge_expired(entries: &DashMap<String, CacheEntry>) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_expired());
    before.saturating_sub(entries.len())
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[async_trait]
impl CacheRepository for MemoryCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.ensure_cleanup_task_started();

        let cached = self.entries.get(key).map(|entry| {
            if entry.is_expired() {
                None
            } else {
                Some(entry.value.clone())
            }
        });

        match cached {
            Some(Some(value)) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(value))
            }
            Some(None) => {
                // Expired: the read guard is released above, so removal cannot deadlock
                self.entries.remove_if(key, |_, entry| entry.is_expired());
                self.cleanups.fetch_add(1, Ordering::Relaxed);
                self.misses.fetch_add(1, Ordering::Relaxed);
                log::debug!("Removed expired cache entry for key: {}", key);
                Ok(None)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> AppResult<()> {
        self.ensure_cleanup_task_started();

        if !self.entries.contains_key(key) {
            self.evict_oldest_entries();
        }

        self.entries.insert(key.to_string(), CacheEntry::new(value, ttl));
        log::debug!("Cached value for key: {} with TTL: {:?}", key, ttl);
        Ok(())
    }

    async fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.cleanups.store(0, Ordering::Relaxed);
        log::info!("Cache cleared");
    }

    async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
            expired_cleanups: self.cleanups.load(Ordering::Relaxed),
            max_entries: self.max_entries,
        }
    }
}
