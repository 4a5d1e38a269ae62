use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval orchestration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Candidates requested from the document index per sub-query.
    pub passages_per_query: usize,
    /// Token budget for passages and paths in one result.
    pub context_budget_tokens: usize,
    /// Score boost for passages whose source names a resolved entity.
    pub entity_match_boost: f64,
    /// Timeout for a single ontology graph call.
    pub graph_timeout_ms: u64,
    /// Timeout for a single embed or search call.
    pub document_timeout_ms: u64,
    /// Queries longer than this are rejected.
    pub max_query_chars: usize,
    /// Retry hint attached to `RetrievalUnavailable`.
    pub retry_after_ms: u64,
}

impl RetrievalConfig {
    pub fn graph_timeout(&self) -> Duration {
        Duration::from_millis(self.graph_timeout_ms)
    }

    pub fn document_timeout(&self) -> Duration {
        Duration::from_millis(self.document_timeout_ms)
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            passages_per_query: defaults::DEFAULT_PASSAGES_PER_QUERY,
            context_budget_tokens: defaults::DEFAULT_CONTEXT_BUDGET_TOKENS,
            entity_match_boost: defaults::DEFAULT_ENTITY_MATCH_BOOST,
            graph_timeout_ms: defaults::DEFAULT_GRAPH_TIMEOUT_MS,
            document_timeout_ms: defaults::DEFAULT_DOCUMENT_TIMEOUT_MS,
            max_query_chars: defaults::DEFAULT_MAX_QUERY_CHARS,
            retry_after_ms: defaults::DEFAULT_RETRY_AFTER_MS,
        }
    }
}
