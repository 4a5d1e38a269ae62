//! Matching strategies, composed in priority order by the resolver.

use career_core::models::{EntityType, MatchStrategy};

use super::vocabulary::{Term, Vocabulary};

/// Confidence of an exact full-name match.
pub const EXACT_CONFIDENCE: f64 = 1.0;
/// Confidence of an alias match.
pub const ALIAS_CONFIDENCE: f64 = 0.95;
/// Fuzzy confidence is this times the similarity.
pub const FUZZY_CONFIDENCE_SCALE: f64 = 0.9;

/// A term found at a token span `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub entity_type: EntityType,
    pub strategy: MatchStrategy,
    pub confidence: f64,
    pub start: usize,
    pub end: usize,
}

impl Candidate {
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Candidate) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One matching policy. Implementations must be pure over their inputs.
pub trait EntityMatcher: Send + Sync {
    fn strategy(&self) -> MatchStrategy;

    /// Every candidate in `tokens`, overlapping or not.
    fn find(&self, tokens: &[&str], vocabulary: &Vocabulary) -> Vec<Candidate>;
}

fn window_equals(window: &[&str], term: &Term) -> bool {
    window.iter().zip(&term.tokens).all(|(a, b)| *a == b.as_str())
}

fn exact_windows(
    tokens: &[&str],
    terms: &[Term],
    strategy: MatchStrategy,
    confidence: f64,
) -> Vec<Candidate> {
    let mut found = Vec::new();
    for term in terms {
        let n = term.tokens.len();
        if n > tokens.len() {
            continue;
        }
        for start in 0..=tokens.len() - n {
            if window_equals(&tokens[start..start + n], term) {
                found.push(Candidate {
                    name: term.name.clone(),
                    entity_type: term.entity_type,
                    strategy,
                    confidence,
                    start,
                    end: start + n,
                });
            }
        }
    }
    found
}

/// Full canonical name, token for token.
#[derive(Debug, Default)]
pub struct ExactMatcher;

impl EntityMatcher for ExactMatcher {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Exact
    }

    fn find(&self, tokens: &[&str], vocabulary: &Vocabulary) -> Vec<Candidate> {
        exact_windows(tokens, vocabulary.terms(), MatchStrategy::Exact, EXACT_CONFIDENCE)
    }
}

/// Synonym table lookup.
#[derive(Debug, Default)]
pub struct AliasMatcher;

impl EntityMatcher for AliasMatcher {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Alias
    }

    fn find(&self, tokens: &[&str], vocabulary: &Vocabulary) -> Vec<Candidate> {
        exact_windows(tokens, vocabulary.aliases(), MatchStrategy::Alias, ALIAS_CONFIDENCE)
    }
}

/// Near-miss spellings: the better of token Jaccard and normalized
/// Levenshtein similarity, over spans with the term's token count.
#[derive(Debug)]
pub struct FuzzyMatcher {
    threshold: f64,
    min_chars: usize,
}

impl FuzzyMatcher {
    pub fn new(threshold: f64, min_chars: usize) -> Self {
        Self {
            threshold,
            min_chars,
        }
    }

    pub fn similarity(window: &[&str], term: &Term) -> f64 {
        let jaccard = token_jaccard(window, &term.tokens);
        let edit = strsim::normalized_levenshtein(&window.join(" "), &term.text());
        jaccard.max(edit)
    }
}

fn token_jaccard(a: &[&str], b: &[String]) -> f64 {
    let left: std::collections::BTreeSet<&str> = a.iter().copied().collect();
    let right: std::collections::BTreeSet<&str> = b.iter().map(String::as_str).collect();
    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    left.intersection(&right).count() as f64 / union as f64
}

impl EntityMatcher for FuzzyMatcher {
    fn strategy(&self) -> MatchStrategy {
        MatchStrategy::Fuzzy
    }

    fn find(&self, tokens: &[&str], vocabulary: &Vocabulary) -> Vec<Candidate> {
        let mut found = Vec::new();
        for term in vocabulary.terms() {
            let n = term.tokens.len();
            if n > tokens.len() || term.char_len() < self.min_chars {
                continue;
            }
            for start in 0..=tokens.len() - n {
                let window = &tokens[start..start + n];
                if window_equals(window, term) {
                    continue;
                }
                let similarity = Self::similarity(window, term);
                if similarity >= self.threshold {
                    found.push(Candidate {
                        name: term.name.clone(),
                        entity_type: term.entity_type,
                        strategy: MatchStrategy::Fuzzy,
                        confidence: FUZZY_CONFIDENCE_SCALE * similarity,
                        start,
                        end: start + n,
                    });
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::seed(&BTreeMap::new())
    }

    #[test]
    fn exact_finds_multi_token_names() {
        let tokens = ["become", "a", "data", "engineer"];
        let found = ExactMatcher.find(&tokens, &vocab());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Data Engineer");
        assert_eq!((found[0].start, found[0].end), (2, 4));
        assert_eq!(found[0].confidence, EXACT_CONFIDENCE);
    }

    #[test]
    fn alias_maps_to_canonical() {
        let tokens = ["learn", "etl", "and", "stats"];
        let mut names: Vec<String> = AliasMatcher
            .find(&tokens, &vocab())
            .into_iter()
            .map(|c| c.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["ETL Processes", "Statistics"]);
    }

    #[test]
    fn fuzzy_catches_plurals_and_typos() {
        let matcher = FuzzyMatcher::new(0.8, 4);
        let tokens = ["data", "analysts", "and", "pyhton"];
        let found = matcher.find(&tokens, &vocab());
        let analyst = found.iter().find(|c| c.name == "Data Analyst").unwrap();
        assert!(analyst.confidence < EXACT_CONFIDENCE * FUZZY_CONFIDENCE_SCALE + 1e-9);
        assert!(analyst.confidence > 0.8);
        // "pyhton" is two edits from "python": 1 - 2/6 < 0.8.
        assert!(!found.iter().any(|c| c.name == "Python"));
    }

    #[test]
    fn fuzzy_ignores_short_terms() {
        let matcher = FuzzyMatcher::new(0.5, 4);
        let found = matcher.find(&["sqk"], &vocab());
        assert!(found.iter().all(|c| c.name != "SQL"));
    }

    #[test]
    fn fuzzy_requires_equal_token_counts() {
        let matcher = FuzzyMatcher::new(0.8, 4);
        let found = matcher.find(&["machine", "learnin"], &vocab());
        assert!(found.iter().any(|c| c.name == "Machine Learning"));
        assert!(found.iter().all(|c| c.name != "Machine Learning Engineer"));
    }
}
