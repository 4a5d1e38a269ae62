//! Context cache: fingerprint → shared result, with single-flight builds.
//!
//! Backed by a moka `future::Cache` with LRU eviction and a TTL. Concurrent
//! misses on one key are coalesced by `entry().or_try_insert_with()`: one
//! caller runs the build, the rest await it. Failed builds are not stored.
//! Entries are checked at lookup; stale or corrupt ones are dropped and
//! rebuilt without surfacing an error.

pub mod entry;

use std::future::Future;
use std::sync::Arc;

use moka::future::Cache;
use moka::policy::EvictionPolicy;
use tracing::debug;

use career_core::config::CacheConfig;
use career_core::errors::{CareerError, CareerResult};
use career_core::generation::GenerationSnapshot;
use career_observability::tracing_setup::events;

pub use entry::CacheEntry;

/// Lookups that find a bad entry drop it and try again this many times.
const MAX_ATTEMPTS: usize = 2;

/// How a lookup was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Found a valid entry.
    Hit,
    /// This caller ran the build.
    Built,
    /// Another caller's build was awaited.
    Joined,
}

/// Why an entry was dropped at lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    Stale,
    Corrupt(String),
}

#[derive(Debug)]
pub struct CacheLookup {
    pub entry: Arc<CacheEntry>,
    pub outcome: CacheOutcome,
    pub dropped: Vec<DropReason>,
}

pub struct ContextCache {
    cache: Cache<String, Arc<CacheEntry>>,
}

impl ContextCache {
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.capacity)
            .time_to_live(config.ttl())
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { cache }
    }

    /// Serve `fingerprint` from the cache or run `build` once for all
    /// concurrent callers.
    ///
    /// `generations` is the snapshot the request started under. Only entries
    /// older than it are stale, so callers joining a build that began under
    /// the same snapshot accept its result even if a stamp moved meanwhile.
    pub async fn get_or_build<F, Fut>(
        &self,
        fingerprint: &str,
        generations: GenerationSnapshot,
        build: F,
    ) -> CareerResult<CacheLookup>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = CareerResult<CacheEntry>>,
    {
        let mut dropped = Vec::new();

        for _ in 0..MAX_ATTEMPTS {
            if let Some(entry) = self.cache.get(fingerprint).await {
                match self.check(&entry, fingerprint, generations) {
                    Ok(()) => {
                        entry.touch();
                        return Ok(CacheLookup {
                            entry,
                            outcome: CacheOutcome::Hit,
                            dropped,
                        });
                    }
                    Err(reason) => {
                        self.cache.invalidate(fingerprint).await;
                        dropped.push(reason);
                    }
                }
            }

            let init = async { build().await.map(Arc::new) };
            let slot = self
                .cache
                .entry(fingerprint.to_string())
                .or_try_insert_with(init)
                .await
                .map_err(CareerError::from_shared)?;

            if slot.is_fresh() {
                debug!(fingerprint, "cache entry built");
                return Ok(CacheLookup {
                    entry: slot.into_value(),
                    outcome: CacheOutcome::Built,
                    dropped,
                });
            }

            let entry = slot.into_value();
            match self.check(&entry, fingerprint, generations) {
                Ok(()) => {
                    entry.touch();
                    return Ok(CacheLookup {
                        entry,
                        outcome: CacheOutcome::Joined,
                        dropped,
                    });
                }
                Err(reason) => {
                    self.cache.invalidate(fingerprint).await;
                    dropped.push(reason);
                }
            }
        }

        // Every attempt found a bad entry; answer without caching.
        let entry = Arc::new(build().await?);
        Ok(CacheLookup {
            entry,
            outcome: CacheOutcome::Built,
            dropped,
        })
    }

    fn check(
        &self,
        entry: &CacheEntry,
        fingerprint: &str,
        generations: GenerationSnapshot,
    ) -> Result<(), DropReason> {
        if entry.generations.is_older_than(&generations) {
            debug!(fingerprint, generations = ?entry.generations, "stale cache entry dropped");
            return Err(DropReason::Stale);
        }
        entry.verify(fingerprint).map_err(|e| {
            events::cache_entry_dropped(fingerprint, &e.to_string());
            DropReason::Corrupt(e.to_string())
        })
    }

    pub async fn get(&self, fingerprint: &str) -> Option<Arc<CacheEntry>> {
        self.cache.get(fingerprint).await
    }

    /// Store an entry under its own fingerprint.
    pub async fn insert(&self, entry: CacheEntry) {
        self.cache.insert(entry.fingerprint.clone(), Arc::new(entry)).await;
    }

    /// Store an entry under an arbitrary key, bypassing the fingerprint link.
    pub async fn insert_under(&self, key: &str, entry: CacheEntry) {
        self.cache.insert(key.to_string(), Arc::new(entry)).await;
    }

    /// Approximate; pending evictions are applied lazily.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}
