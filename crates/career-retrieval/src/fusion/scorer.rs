//! Passage scoring: index similarity plus a fixed entity-match boost.

use std::cmp::Ordering;

use career_core::models::{Passage, ResolvedEntity, SearchHit};

/// Turn deduplicated hits into passages ranked best first.
///
/// Ties on score are broken by chunk id so ranking is deterministic.
pub fn rank(hits: Vec<SearchHit>, entities: &[ResolvedEntity], boost: f64) -> Vec<Passage> {
    let mut passages: Vec<Passage> = hits
        .into_iter()
        .map(|hit| {
            let entity_match = entities
                .iter()
                .any(|e| hit.source.names_entity(&e.name, e.entity_type));
            let score = if entity_match {
                hit.score + boost
            } else {
                hit.score
            };
            Passage {
                chunk_id: hit.chunk_id,
                text: hit.text,
                similarity: hit.score,
                score,
                entity_match,
                source: hit.source,
                tokens: 0,
            }
        })
        .collect();

    passages.sort_by(compare);
    passages
}

pub fn compare(a: &Passage, b: &Passage) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.chunk_id.cmp(&b.chunk_id))
}
