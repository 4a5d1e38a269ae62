//! Property tests for the resolver, fingerprints and fusion.

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;

use career_core::config::ResolverConfig;
use career_core::generation::GenerationSnapshot;
use career_core::models::{PathOutcome, SearchHit, SourceKind, SourceMetadata};
use career_retrieval::fingerprint;
use career_retrieval::fusion;
use career_retrieval::resolver::normalize::normalize;
use career_retrieval::resolver::{EntityResolver, Vocabulary};
use career_tokens::TokenCounter;

fn resolver() -> EntityResolver {
    EntityResolver::new(
        Vocabulary::seed(&BTreeMap::new()),
        &ResolverConfig::default(),
    )
}

/// Query-like text mixing vocabulary words, noise and punctuation.
fn query_text() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        Just("data".to_string()),
        Just("analyst".to_string()),
        Just("engineer".to_string()),
        Just("BI".to_string()),
        Just("sql".to_string()),
        Just("Python".to_string()),
        Just("machine".to_string()),
        Just("learning".to_string()),
        Just("from".to_string()),
        Just("to".to_string()),
        Just("ml".to_string()),
        Just("powerbi".to_string()),
        Just("?".to_string()),
        Just("statistcs".to_string()),
        "[a-z]{1,8}",
    ];
    prop::collection::vec(word, 0..12).prop_map(|words| words.join(" "))
}

fn hits() -> impl Strategy<Value = Vec<SearchHit>> {
    prop::collection::vec((0usize..8, 0.0f64..1.0), 0..20).prop_map(|raw| {
        raw.into_iter()
            .map(|(id, score)| SearchHit {
                chunk_id: format!("doc{id}#0"),
                score,
                text: format!("passage number {id} about careers"),
                source: SourceMetadata {
                    source: format!("doc{id}.md"),
                    kind: SourceKind::General,
                    entity: None,
                    title: None,
                    section: None,
                },
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in "\\PC{0,60}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn resolved_spans_never_overlap(text in query_text()) {
        let query = resolver().resolve(&text);
        let token_count = query.normalized.split_whitespace().count();
        let mut seen = HashSet::new();
        for pair in query.entities.windows(2) {
            prop_assert!(pair[0].span.1 <= pair[1].span.0, "{:?}", query.entities);
        }
        for entity in &query.entities {
            prop_assert!(entity.span.0 < entity.span.1);
            prop_assert!(entity.span.1 <= token_count);
            prop_assert!((0.0..=1.0).contains(&entity.confidence));
            prop_assert!(seen.insert((entity.entity_type, entity.name.clone())));
        }
        if let (Some(s), Some(t)) = (&query.source_role, &query.target_role) {
            prop_assert_ne!(s, t);
        }
    }

    #[test]
    fn fingerprint_is_deterministic(text in query_text(), graph in 0u64..4, docs in 0u64..4) {
        let r = resolver();
        let stamps = GenerationSnapshot { graph, documents: docs };
        let a = fingerprint::compute(&r.resolve(&text), stamps).unwrap();
        let b = fingerprint::compute(&r.resolve(&text), stamps).unwrap();
        prop_assert_eq!(&a, &b);

        let bumped = GenerationSnapshot { graph, documents: docs + 1 };
        let c = fingerprint::compute(&r.resolve(&text), bumped).unwrap();
        prop_assert_ne!(a, c);
    }

    #[test]
    fn fused_passages_are_unique_ranked_and_within_budget(
        hits in hits(),
        budget in 0usize..200,
    ) {
        let counter = TokenCounter::new(64).unwrap();
        let packed = fusion::fuse(&counter, hits, &[], PathOutcome::NotRequested, 0.15, budget);

        prop_assert!(packed.tokens_used <= budget);
        let ids: HashSet<&str> = packed.passages.iter().map(|p| p.chunk_id.as_str()).collect();
        prop_assert_eq!(ids.len(), packed.passages.len());
        for pair in packed.passages.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
