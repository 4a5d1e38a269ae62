//! Cache identity of a resolved query.

use serde::Serialize;

use career_core::errors::CareerResult;
use career_core::generation::GenerationSnapshot;
use career_core::models::{EntityType, QueryIntent, ResolvedQuery};

#[derive(Serialize)]
struct FingerprintInput<'a> {
    text: &'a str,
    entities: Vec<(EntityType, String)>,
    intent: QueryIntent,
    graph_generation: u64,
    document_generation: u64,
}

/// blake3 over canonical JSON of the normalized text, the sorted entity set,
/// the intent, and both generation stamps.
pub fn compute(query: &ResolvedQuery, generations: GenerationSnapshot) -> CareerResult<String> {
    let input = FingerprintInput {
        text: &query.normalized,
        entities: query.entity_keys(),
        intent: query.intent,
        graph_generation: generations.graph,
        document_generation: generations.documents,
    };
    let bytes = serde_json::to_vec(&input)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}
