//! Embed each sub-query and search the document index, concurrently.

use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use career_core::errors::CareerResult;
use career_core::guard::{guarded, AdapterClass};
use career_core::models::{ResolvedQuery, SearchHit};
use career_core::traits::{IDocumentIndex, IQueryEmbedder};

use super::CallRecord;

/// One search per resolved entity name plus one for the raw text,
/// case-insensitively deduplicated.
pub fn sub_queries(query: &ResolvedQuery) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let candidates = query
        .entities
        .iter()
        .map(|e| e.name.as_str())
        .chain(std::iter::once(query.raw.trim()));
    for text in candidates {
        if !text.is_empty() && !out.iter().any(|q| q.eq_ignore_ascii_case(text)) {
            out.push(text.to_string());
        }
    }
    out
}

async fn search_one(
    embedder: &dyn IQueryEmbedder,
    index: &dyn IDocumentIndex,
    text: &str,
    k: usize,
    timeout: Duration,
) -> CareerResult<Vec<SearchHit>> {
    let embedding = guarded(AdapterClass::Documents, "embed", timeout, embedder.embed(text)).await?;
    guarded(
        AdapterClass::Documents,
        "search",
        timeout,
        index.search(&embedding, k),
    )
    .await
}

/// All hits from all sub-queries, unfused, plus one record per sub-query.
pub async fn gather(
    embedder: &dyn IQueryEmbedder,
    index: &dyn IDocumentIndex,
    sub_queries: &[String],
    k: usize,
    timeout: Duration,
) -> (Vec<SearchHit>, Vec<CallRecord>) {
    let outcomes = join_all(
        sub_queries
            .iter()
            .map(|q| search_one(embedder, index, q, k, timeout)),
    )
    .await;

    let mut hits = Vec::new();
    let mut records = Vec::with_capacity(sub_queries.len());
    for (text, outcome) in sub_queries.iter().zip(outcomes) {
        match outcome {
            Ok(found) => {
                debug!(sub_query = %text, hits = found.len(), "document search");
                hits.extend(found);
                records.push(CallRecord::ok(AdapterClass::Documents, "search", text));
            }
            Err(e) => {
                warn!(sub_query = %text, error = %e, "document search failed");
                records.push(CallRecord::failed(AdapterClass::Documents, "search", text, &e));
            }
        }
    }
    (hits, records)
}
