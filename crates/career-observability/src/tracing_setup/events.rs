//! Structured log events for key retrieval operations.

/// Log a completed query.
pub fn query_answered(fingerprint: &str, intent: &str, status: &str, passages: usize, paths: usize) {
    tracing::info!(
        event = "query_answered",
        fingerprint = %fingerprint,
        intent = %intent,
        status = %status,
        passages,
        paths,
        "query answered"
    );
}

/// Log a query that failed on every adapter.
pub fn retrieval_unavailable(failures: usize, retry_after_ms: u64) {
    tracing::error!(
        event = "retrieval_unavailable",
        failures,
        retry_after_ms,
        "retrieval unavailable"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a cache entry dropped on lookup.
pub fn cache_entry_dropped(fingerprint: &str, reason: &str) {
    tracing::warn!(
        event = "cache_entry_dropped",
        fingerprint = %fingerprint,
        reason = %reason,
        "cache entry dropped"
    );
}

/// Log a resolver vocabulary rebuild.
pub fn vocabulary_refreshed(roles: usize, skills: usize, aliases: usize) {
    tracing::info!(
        event = "vocabulary_refreshed",
        roles,
        skills,
        aliases,
        "resolver vocabulary refreshed"
    );
}
