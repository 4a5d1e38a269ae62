//! Metrics collected by the orchestrator. Plain counters; callers hold the lock.

pub mod cache_metrics;
pub mod retrieval_metrics;

use serde::{Deserialize, Serialize};

pub use cache_metrics::CacheMetrics;
pub use retrieval_metrics::RetrievalMetrics;

/// Every metric family, snapshotted together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsCollector {
    pub retrieval: RetrievalMetrics,
    pub cache: CacheMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the snapshot as JSON for export.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
