//! RetrievalOrchestrator: validate → resolve → fingerprint → cache or build.
//!
//! A build runs path search, document search and graph facts concurrently,
//! decides OK / DEGRADED / unavailable, fuses passages and paths into the
//! context budget, and is stored once for every concurrent caller.

use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use career_core::config::CareerConfig;
use career_core::errors::{CareerError, CareerResult};
use career_core::generation::{GenerationSnapshot, GenerationStamps};
use career_core::guard::{guarded, AdapterClass};
use career_core::models::{
    DegradationEvent, EntityType, ResolvedQuery, RetrievalResult, SkillGap,
};
use career_core::traits::{IDocumentIndex, IOntologyGraph, IQueryEmbedder};
use career_observability::tracing_setup::events;
use career_observability::{DegradationTracker, MetricsCollector, TrackedDegradation};
use career_paths::{gap, PathFinder};
use career_tokens::TokenCounter;

use crate::cache::{CacheEntry, CacheLookup, CacheOutcome, ContextCache, DropReason};
use crate::resolver::normalize::normalize;
use crate::resolver::{EntityResolver, Vocabulary};
use crate::search::{self, CallRecord};
use crate::status::{self, StatusTally};
use crate::{fingerprint, fusion, render};

/// Token counts are cached per distinct text.
const TOKEN_CACHE_CAPACITY: u64 = 4_096;

pub struct RetrievalOrchestrator {
    graph: Arc<dyn IOntologyGraph>,
    index: Arc<dyn IDocumentIndex>,
    embedder: Arc<dyn IQueryEmbedder>,
    resolver: RwLock<Arc<EntityResolver>>,
    finder: PathFinder,
    cache: ContextCache,
    stamps: Arc<GenerationStamps>,
    counter: TokenCounter,
    config: CareerConfig,
    metrics: Mutex<MetricsCollector>,
    degradations: Mutex<DegradationTracker>,
}

impl RetrievalOrchestrator {
    /// Starts with the built-in vocabulary; call `refresh_vocabulary` to
    /// pick up the graph's own role and skill names.
    pub fn new(
        config: CareerConfig,
        graph: Arc<dyn IOntologyGraph>,
        index: Arc<dyn IDocumentIndex>,
        embedder: Arc<dyn IQueryEmbedder>,
        stamps: Arc<GenerationStamps>,
    ) -> CareerResult<Self> {
        config.validate()?;
        let vocabulary = Vocabulary::seed(&config.resolver.aliases);
        let resolver = EntityResolver::new(vocabulary, &config.resolver);
        let counter = TokenCounter::new(TOKEN_CACHE_CAPACITY)?;

        info!(
            graph = graph.name(),
            index = index.name(),
            embedder = embedder.name(),
            "retrieval orchestrator ready"
        );

        Ok(Self {
            graph,
            index,
            embedder,
            resolver: RwLock::new(Arc::new(resolver)),
            finder: PathFinder::new(&config.paths),
            cache: ContextCache::new(&config.cache),
            stamps,
            counter,
            config,
            metrics: Mutex::new(MetricsCollector::new()),
            degradations: Mutex::new(DegradationTracker::new()),
        })
    }

    /// Answer one query. Concurrent identical queries share one build and
    /// receive the same `Arc`.
    pub async fn answer_query(&self, raw: &str) -> CareerResult<Arc<RetrievalResult>> {
        if let Err(e) = self.validate(raw) {
            debug!(error = %e, "query rejected");
            self.with_metrics(|m| m.retrieval.record_rejected());
            return Err(e);
        }

        let resolver = self.resolver.read().await.clone();
        let query = resolver.resolve(raw);
        let generations = self.stamps.snapshot();
        let key = fingerprint::compute(&query, generations)?;

        let lookup = self
            .cache
            .get_or_build(&key, generations, || self.build(&query, &key, generations))
            .await;

        match lookup {
            Ok(lookup) => {
                self.record_lookup(&lookup);
                Ok(Arc::clone(&lookup.entry.result))
            }
            Err(e) => {
                if let CareerError::RetrievalUnavailable {
                    failures,
                    retry_after_ms,
                } = &e
                {
                    events::retrieval_unavailable(*failures, *retry_after_ms);
                    self.with_metrics(|m| m.retrieval.record_unavailable());
                }
                Err(e)
            }
        }
    }

    fn validate(&self, raw: &str) -> CareerResult<()> {
        let max = self.config.retrieval.max_query_chars;
        let chars = raw.chars().count();
        if chars > max {
            return Err(CareerError::Validation {
                reason: format!("query is {chars} characters, the limit is {max}"),
            });
        }
        if normalize(raw).is_empty() {
            return Err(CareerError::Validation {
                reason: "query has no words".to_string(),
            });
        }
        Ok(())
    }

    async fn build(
        &self,
        query: &ResolvedQuery,
        key: &str,
        generations: GenerationSnapshot,
    ) -> CareerResult<CacheEntry> {
        let retrieval = &self.config.retrieval;
        let sub_queries = search::documents::sub_queries(query);

        let ((paths, path_record), (hits, document_records), (facts, fact_records)) = tokio::join!(
            search::paths::find(
                self.graph.as_ref(),
                &self.finder,
                query,
                retrieval.graph_timeout(),
            ),
            search::documents::gather(
                self.embedder.as_ref(),
                self.index.as_ref(),
                &sub_queries,
                retrieval.passages_per_query,
                retrieval.document_timeout(),
            ),
            search::facts::gather(self.graph.as_ref(), query, retrieval.graph_timeout()),
        );

        let mut records: Vec<CallRecord> = document_records;
        records.extend(fact_records);
        records.extend(path_record);

        let tally = StatusTally::from_records(&records);
        let degradations = status::degradation_events(&records, &tally);
        self.track_degradations(&tally, &degradations);
        let status = tally.decide(retrieval.retry_after_ms)?;

        let packed = fusion::fuse(
            &self.counter,
            hits,
            &query.entities,
            paths,
            retrieval.entity_match_boost,
            retrieval.context_budget_tokens,
        );

        debug!(
            fingerprint = key,
            calls = records.len(),
            passages = packed.passages.len(),
            tokens = packed.tokens_used,
            truncated = packed.truncated,
            "retrieval built"
        );

        CacheEntry::new(RetrievalResult {
            fingerprint: key.to_string(),
            intent: query.intent,
            entities: query.entities.clone(),
            facts,
            paths: packed.paths,
            passages: packed.passages,
            status,
            generations,
            truncated: packed.truncated,
            degradations,
        })
    }

    /// New failures are recorded; a class that answered at least once is
    /// marked recovered.
    fn track_degradations(&self, tally: &StatusTally, degradations: &[DegradationEvent]) {
        let Ok(mut tracker) = self.degradations.lock() else {
            warn!("degradation tracker lock poisoned");
            return;
        };
        for event in degradations {
            tracker.record(event.clone());
        }
        for class in [AdapterClass::Graph, AdapterClass::Documents] {
            if tally.class(class).successes > 0 {
                let recovered = tracker.mark_recovered(class.as_str());
                if recovered > 0 {
                    debug!(component = class.as_str(), recovered, "adapter recovered");
                }
            }
        }
    }

    fn record_lookup(&self, lookup: &CacheLookup) {
        let result = &lookup.entry.result;
        let hit = !result.passages.is_empty() || !result.paths.paths().is_empty();
        let tokens = self.tokens_used(result) as u64;
        let budget = self.config.retrieval.context_budget_tokens as u64;

        self.with_metrics(|m| {
            for reason in &lookup.dropped {
                match reason {
                    DropReason::Stale => m.cache.record_stale(),
                    DropReason::Corrupt(_) => m.cache.record_corrupted(),
                }
            }
            match lookup.outcome {
                CacheOutcome::Hit => m.cache.record_hit(),
                CacheOutcome::Built => m.cache.record_build(),
                CacheOutcome::Joined => m.cache.record_join(),
            }
            m.retrieval
                .record_answer(result.intent, result.status, hit, tokens, budget);
        });

        events::query_answered(
            &result.fingerprint,
            result.intent.as_str(),
            &format!("{:?}", result.status),
            result.passages.len(),
            result.paths.paths().len(),
        );
    }

    fn tokens_used(&self, result: &RetrievalResult) -> usize {
        let passages: usize = result.passages.iter().map(|p| p.tokens).sum();
        let paths: usize = result
            .paths
            .paths()
            .iter()
            .map(|p| self.counter.count_cached(&render::path_block(p)))
            .sum();
        passages + paths
    }

    fn with_metrics(&self, update: impl FnOnce(&mut MetricsCollector)) {
        match self.metrics.lock() {
            Ok(mut metrics) => update(&mut metrics),
            Err(_) => warn!("metrics lock poisoned"),
        }
    }

    /// Rebuild the resolver from the graph's current role and skill names.
    /// Queries already running keep the vocabulary they started with.
    pub async fn refresh_vocabulary(&self) -> CareerResult<()> {
        let vocabulary = Vocabulary::load(
            self.graph.as_ref(),
            &self.config.resolver.aliases,
            self.config.retrieval.graph_timeout(),
        )
        .await?;
        events::vocabulary_refreshed(
            vocabulary.role_count(),
            vocabulary.skill_count(),
            vocabulary.aliases().len(),
        );
        let resolver = EntityResolver::new(vocabulary, &self.config.resolver);
        *self.resolver.write().await = Arc::new(resolver);
        Ok(())
    }

    /// Skills to learn, maintain and phase out moving from one role to another.
    /// Role names are matched case-insensitively against the vocabulary.
    pub async fn skill_gap(&self, from: &str, to: &str) -> CareerResult<SkillGap> {
        let (from, to) = {
            let resolver = self.resolver.read().await;
            let vocabulary = resolver.vocabulary();
            (canonical_role(vocabulary, from), canonical_role(vocabulary, to))
        };
        let timeout = self.config.retrieval.graph_timeout();
        let (current, next) = tokio::try_join!(
            guarded(AdapterClass::Graph, "role_profile", timeout, self.graph.role_profile(&from)),
            guarded(AdapterClass::Graph, "role_profile", timeout, self.graph.role_profile(&to)),
        )?;
        let current = current.ok_or_else(|| CareerError::Validation {
            reason: format!("unknown role {from:?}"),
        })?;
        let next = next.ok_or_else(|| CareerError::Validation {
            reason: format!("unknown role {to:?}"),
        })?;
        Ok(gap::between(&current, &next))
    }

    /// Snapshot of retrieval and cache counters.
    pub fn metrics(&self) -> MetricsCollector {
        match self.metrics.lock() {
            Ok(metrics) => metrics.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Adapter failures not yet followed by a successful call of the same class.
    pub fn active_degradations(&self) -> Vec<TrackedDegradation> {
        let tracker = match self.degradations.lock() {
            Ok(tracker) => tracker,
            Err(poisoned) => poisoned.into_inner(),
        };
        let active = tracker.active_degradations().into_iter().cloned().collect();
        active
    }

    pub fn cache(&self) -> &ContextCache {
        &self.cache
    }

    pub fn stamps(&self) -> &Arc<GenerationStamps> {
        &self.stamps
    }

    pub fn config(&self) -> &CareerConfig {
        &self.config
    }
}

/// The vocabulary's spelling of a role name, or the name as given.
fn canonical_role(vocabulary: &Vocabulary, name: &str) -> String {
    vocabulary
        .lookup(name)
        .filter(|term| term.entity_type == EntityType::Role)
        .map(|term| term.name.clone())
        .unwrap_or_else(|| name.to_string())
}
