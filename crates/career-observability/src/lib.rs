//! # career-observability
//!
//! Structured tracing setup, retrieval and cache metrics, and degradation
//! event tracking with recovery status.

pub mod degradation;
pub mod metrics;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use metrics::{CacheMetrics, MetricsCollector, RetrievalMetrics};
pub use tracing_setup::init_tracing;
