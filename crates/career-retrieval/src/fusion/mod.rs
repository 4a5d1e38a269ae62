//! Fusion: dedup → entity-boosted ranking → context budget.

pub mod budget;
pub mod dedup;
pub mod scorer;

use career_core::models::{PathOutcome, ResolvedEntity, SearchHit};
use career_tokens::TokenCounter;

pub use budget::Packed;

pub fn fuse(
    counter: &TokenCounter,
    hits: Vec<SearchHit>,
    entities: &[ResolvedEntity],
    paths: PathOutcome,
    boost: f64,
    budget: usize,
) -> Packed {
    let unique = dedup::deduplicate(hits);
    let ranked = scorer::rank(unique, entities, boost);
    budget::pack(counter, ranked, paths, budget)
}

#[cfg(test)]
mod tests {
    use career_core::models::{
        EntityType, MatchStrategy, PathHop, SkillGap, SourceKind, SourceMetadata, TransitionPath,
    };

    use super::*;

    fn hit(id: &str, score: f64, kind: SourceKind, entity: Option<&str>) -> SearchHit {
        SearchHit {
            chunk_id: id.to_string(),
            score,
            text: format!("passage {id}"),
            source: SourceMetadata {
                source: format!("{id}.md"),
                kind,
                entity: entity.map(str::to_string),
                title: None,
                section: None,
            },
        }
    }

    fn sql() -> ResolvedEntity {
        ResolvedEntity {
            name: "SQL".into(),
            entity_type: EntityType::Skill,
            confidence: 1.0,
            strategy: MatchStrategy::Exact,
            span: (0, 1),
        }
    }

    fn path(roles: &[&str]) -> TransitionPath {
        TransitionPath {
            roles: roles.iter().map(|r| r.to_string()).collect(),
            hops: roles
                .windows(2)
                .map(|w| PathHop {
                    from: w[0].to_string(),
                    to: w[1].to_string(),
                    weight: None,
                    gap: SkillGap::default(),
                })
                .collect(),
            total_skill_gap: 0,
            score: 0.0,
        }
    }

    fn counter() -> TokenCounter {
        TokenCounter::new(128).unwrap()
    }

    #[test]
    fn duplicates_keep_the_higher_score() {
        let hits = vec![
            hit("a", 0.4, SourceKind::General, None),
            hit("b", 0.5, SourceKind::General, None),
            hit("a", 0.7, SourceKind::General, None),
        ];
        let packed = fuse(&counter(), hits, &[], PathOutcome::NotRequested, 0.15, 1000);
        let ids: Vec<&str> = packed.passages.iter().map(|p| p.chunk_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(packed.passages[0].similarity, 0.7);
    }

    #[test]
    fn entity_match_boost_reorders() {
        let hits = vec![
            hit("general", 0.60, SourceKind::General, None),
            hit("sql", 0.50, SourceKind::Skill, Some("SQL")),
        ];
        let packed = fuse(&counter(), hits, &[sql()], PathOutcome::NotRequested, 0.15, 1000);
        assert_eq!(packed.passages[0].chunk_id, "sql");
        assert!(packed.passages[0].entity_match);
        assert!((packed.passages[0].score - 0.65).abs() < 1e-9);
        assert!(!packed.truncated);
    }

    #[test]
    fn equal_scores_order_by_chunk_id() {
        let hits = vec![
            hit("z", 0.5, SourceKind::General, None),
            hit("m", 0.5, SourceKind::General, None),
        ];
        let packed = fuse(&counter(), hits, &[], PathOutcome::NotRequested, 0.15, 1000);
        assert_eq!(packed.passages[0].chunk_id, "m");
    }

    #[test]
    fn zero_budget_keeps_best_path_only() {
        let hits = vec![hit("a", 0.9, SourceKind::General, None)];
        let paths = PathOutcome::Found {
            paths: vec![path(&["A", "B"]), path(&["A", "C", "B"])],
        };
        let packed = fuse(&counter(), hits, &[], paths, 0.15, 0);
        assert!(packed.passages.is_empty());
        assert_eq!(packed.paths.paths().len(), 1);
        assert_eq!(packed.paths.paths()[0].roles, vec!["A", "B"]);
        assert!(packed.truncated);
    }

    #[test]
    fn passages_before_further_paths() {
        let c = counter();
        let top = path(&["A", "B"]);
        let second = path(&["A", "C", "B"]);
        let hits = vec![hit("a", 0.9, SourceKind::General, None)];
        let top_cost = c.count(&crate::render::path_block(&top));
        let passage_cost = c.count("passage a");
        // Room for the top path and the passage, not the second path.
        let budget = top_cost + passage_cost;
        let packed = fuse(
            &c,
            hits,
            &[],
            PathOutcome::Found {
                paths: vec![top, second],
            },
            0.15,
            budget,
        );
        assert_eq!(packed.passages.len(), 1);
        assert_eq!(packed.passages[0].tokens, passage_cost);
        assert_eq!(packed.paths.paths().len(), 1);
        assert!(packed.truncated);
        assert!(packed.tokens_used <= budget);
    }
}
