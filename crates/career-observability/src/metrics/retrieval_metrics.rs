//! Per-intent query and hit counts, status outcomes, token usage.

use std::collections::BTreeMap;

use career_core::models::{QueryIntent, RetrievalStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalMetrics {
    /// Per-intent total query counts.
    pub queries_by_intent: BTreeMap<String, u64>,
    /// Per-intent counts of answers with at least one passage or path.
    pub hits_by_intent: BTreeMap<String, u64>,
    pub ok: u64,
    pub degraded: u64,
    /// Queries that ended in `RetrievalUnavailable`.
    pub unavailable: u64,
    /// Queries rejected before any adapter work.
    pub rejected: u64,
    pub total_tokens_used: u64,
    pub total_tokens_budgeted: u64,
}

impl RetrievalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answered query.
    pub fn record_answer(
        &mut self,
        intent: QueryIntent,
        status: RetrievalStatus,
        hit: bool,
        tokens_used: u64,
        budget: u64,
    ) {
        let key = intent.as_str().to_string();
        *self.queries_by_intent.entry(key.clone()).or_default() += 1;
        if hit {
            *self.hits_by_intent.entry(key).or_default() += 1;
        }
        match status {
            RetrievalStatus::Ok => self.ok += 1,
            RetrievalStatus::Degraded => self.degraded += 1,
        }
        self.total_tokens_used += tokens_used;
        self.total_tokens_budgeted += budget;
    }

    pub fn record_unavailable(&mut self) {
        self.unavailable += 1;
    }

    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    pub fn total_queries(&self) -> u64 {
        self.queries_by_intent.values().sum()
    }

    /// Hit rate for one intent.
    pub fn hit_rate(&self, intent: QueryIntent) -> f64 {
        let key = intent.as_str();
        let queries = self.queries_by_intent.get(key).copied().unwrap_or(0);
        if queries == 0 {
            return 0.0;
        }
        let hits = self.hits_by_intent.get(key).copied().unwrap_or(0);
        hits as f64 / queries as f64
    }

    /// Share of answered queries that came back degraded.
    pub fn degraded_rate(&self) -> f64 {
        let answered = self.ok + self.degraded;
        if answered == 0 {
            return 0.0;
        }
        self.degraded as f64 / answered as f64
    }

    /// Overall token efficiency (used / budgeted).
    pub fn token_efficiency(&self) -> f64 {
        if self.total_tokens_budgeted == 0 {
            return 0.0;
        }
        self.total_tokens_used as f64 / self.total_tokens_budgeted as f64
    }
}
