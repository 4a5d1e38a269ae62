//! Context cache hit/miss/build counters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheMetrics {
    pub hits: u64,
    /// Requests that ran the builder.
    pub builds: u64,
    /// Requests that awaited another caller's in-flight build.
    pub joins: u64,
    /// Entries dropped because a generation stamp moved on.
    pub stale: u64,
    /// Entries dropped because they failed verification.
    pub corrupted: u64,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_build(&mut self) {
        self.builds += 1;
    }

    pub fn record_join(&mut self) {
        self.joins += 1;
    }

    pub fn record_stale(&mut self) {
        self.stale += 1;
    }

    pub fn record_corrupted(&mut self) {
        self.corrupted += 1;
    }

    pub fn invalidations(&self) -> u64 {
        self.stale + self.corrupted
    }

    /// Requests served without running the builder themselves.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.builds + self.joins;
        if total == 0 {
            return 0.0;
        }
        (self.hits + self.joins) as f64 / total as f64
    }
}
