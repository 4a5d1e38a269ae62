//! Entity resolver: raw text → normalized text, role/skill entities, intent,
//! transition endpoints. Never fails; an empty entity set is a valid answer.

pub mod intent;
pub mod matcher;
pub mod normalize;
pub mod vocabulary;

use std::cmp::Reverse;

use tracing::debug;

use career_core::config::ResolverConfig;
use career_core::models::{ResolvedEntity, ResolvedQuery};

pub use matcher::{AliasMatcher, Candidate, EntityMatcher, ExactMatcher, FuzzyMatcher};
pub use vocabulary::Vocabulary;

/// Resolves queries against one vocabulary snapshot.
pub struct EntityResolver {
    vocabulary: Vocabulary,
    matchers: Vec<Box<dyn EntityMatcher>>,
}

impl EntityResolver {
    /// Exact, alias and fuzzy matchers over `vocabulary`.
    pub fn new(vocabulary: Vocabulary, config: &ResolverConfig) -> Self {
        Self::with_matchers(
            vocabulary,
            vec![
                Box::new(ExactMatcher),
                Box::new(AliasMatcher),
                Box::new(FuzzyMatcher::new(
                    config.fuzzy_threshold,
                    config.min_fuzzy_chars,
                )),
            ],
        )
    }

    /// Custom matcher composition. Candidates are prioritized by each
    /// matcher's strategy, not by position in the list.
    pub fn with_matchers(vocabulary: Vocabulary, matchers: Vec<Box<dyn EntityMatcher>>) -> Self {
        Self {
            vocabulary,
            matchers,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn resolve(&self, raw: &str) -> ResolvedQuery {
        let normalized = normalize::normalize(raw);
        let tokens = normalize::tokens(&normalized);

        let candidates: Vec<Candidate> = self
            .matchers
            .iter()
            .flat_map(|m| m.find(&tokens, &self.vocabulary))
            .collect();
        let entities = select(candidates);

        let intent = intent::classify(&normalized, &entities);
        let (source_role, target_role) = intent::endpoints(&tokens, &entities);

        debug!(
            normalized = %normalized,
            entities = entities.len(),
            intent = intent.as_str(),
            ?source_role,
            ?target_role,
            "query resolved"
        );

        ResolvedQuery {
            raw: raw.to_string(),
            normalized,
            entities,
            intent,
            source_role,
            target_role,
        }
    }
}

/// Greedy selection: longest span, then strategy priority, then role before
/// skill, then confidence. Spans never overlap and each canonical entity is
/// reported once. Returned in order of appearance.
pub fn select(mut candidates: Vec<Candidate>) -> Vec<ResolvedEntity> {
    candidates.sort_by(|a, b| {
        (Reverse(a.span_len()), a.strategy, a.entity_type)
            .cmp(&(Reverse(b.span_len()), b.strategy, b.entity_type))
            .then_with(|| b.confidence.total_cmp(&a.confidence))
            .then_with(|| (a.start, &a.name).cmp(&(b.start, &b.name)))
    });

    let mut chosen: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        let overlaps = chosen.iter().any(|c| c.overlaps(&candidate));
        let duplicate = chosen
            .iter()
            .any(|c| c.entity_type == candidate.entity_type && c.name == candidate.name);
        if !overlaps && !duplicate {
            chosen.push(candidate);
        }
    }
    chosen.sort_by_key(|c| c.start);

    chosen
        .into_iter()
        .map(|c| ResolvedEntity {
            name: c.name,
            entity_type: c.entity_type,
            confidence: c.confidence,
            strategy: c.strategy,
            span: (c.start, c.end),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use career_core::models::{EntityType, MatchStrategy, QueryIntent};

    use super::*;

    fn resolver() -> EntityResolver {
        EntityResolver::new(Vocabulary::seed(&BTreeMap::new()), &ResolverConfig::default())
    }

    #[test]
    fn longest_span_wins_overlap() {
        let q = resolver().resolve("What does a Machine Learning Engineer do?");
        assert_eq!(q.entities.len(), 1);
        assert_eq!(q.entities[0].name, "Machine Learning Engineer");
        assert_eq!(q.entities[0].entity_type, EntityType::Role);
    }

    #[test]
    fn exact_beats_alias_and_fuzzy() {
        let q = resolver().resolve("Is SQL enough?");
        assert_eq!(q.entities[0].strategy, MatchStrategy::Exact);
        assert_eq!(q.entities[0].confidence, 1.0);
    }

    #[test]
    fn entity_reported_once() {
        let q = resolver().resolve("python, more python, and stats and statistics");
        let names: Vec<&str> = q.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "Statistics"]);
    }

    #[test]
    fn alias_resolves_role() {
        let q = resolver().resolve("how do I become an ML engineer");
        assert_eq!(q.intent, QueryIntent::TransitionPath);
        assert_eq!(q.target_role.as_deref(), Some("Machine Learning Engineer"));
        assert_eq!(q.entities[0].strategy, MatchStrategy::Alias);
    }

    #[test]
    fn longer_alias_beats_shorter_exact_skill() {
        let q = resolver().resolve("How do I become a machine learning developer?");
        assert_eq!(q.entities.len(), 1);
        assert_eq!(q.entities[0].name, "Machine Learning Engineer");
        assert_eq!(q.entities[0].entity_type, EntityType::Role);
        assert_eq!(q.entities[0].strategy, MatchStrategy::Alias);
        assert_eq!(q.intent, QueryIntent::TransitionPath);
        assert_eq!(q.target_role.as_deref(), Some("Machine Learning Engineer"));
    }

    #[test]
    fn plural_role_is_a_role_question() {
        let q = resolver().resolve("What do machine learning engineers do?");
        assert_eq!(q.entities.len(), 1);
        assert_eq!(q.entities[0].name, "Machine Learning Engineer");
        assert_eq!(q.entities[0].strategy, MatchStrategy::Fuzzy);
        assert_eq!(q.intent, QueryIntent::RoleInfo);
    }

    #[test]
    fn span_length_outranks_strategy() {
        let skill = Candidate {
            name: "Machine Learning".into(),
            entity_type: EntityType::Skill,
            strategy: MatchStrategy::Exact,
            confidence: 1.0,
            start: 0,
            end: 2,
        };
        let role = Candidate {
            name: "Machine Learning Engineer".into(),
            entity_type: EntityType::Role,
            strategy: MatchStrategy::Fuzzy,
            confidence: 0.86,
            start: 0,
            end: 3,
        };
        let selected = select(vec![skill, role]);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Machine Learning Engineer");
    }

    #[test]
    fn gibberish_resolves_to_nothing() {
        let q = resolver().resolve("asdkjasd");
        assert!(q.entities.is_empty());
        assert_eq!(q.intent, QueryIntent::Unknown);
        assert_eq!(q.source_role, None);
        assert_eq!(q.target_role, None);
    }

    #[test]
    fn overlapping_candidates_never_both_selected() {
        let a = Candidate {
            name: "Data Engineer".into(),
            entity_type: EntityType::Role,
            strategy: MatchStrategy::Fuzzy,
            confidence: 0.85,
            start: 0,
            end: 2,
        };
        let b = Candidate {
            name: "Data Analyst".into(),
            confidence: 0.82,
            ..a.clone()
        };
        let selected = select(vec![b, a]);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Data Engineer");
    }
}
