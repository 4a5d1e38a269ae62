//! Intent classification and transition endpoint extraction.
//!
//! Keyword heuristics over normalized text. Transition cues win over
//! learning cues, which win over entity-based intents.

use std::sync::OnceLock;

use regex::Regex;

use career_core::models::{EntityType, QueryIntent, ResolvedEntity};

/// Phrases that ask how to move between roles.
const TRANSITION_CUES: &[&str] = &[
    "transition",
    "transitioning",
    "become",
    "becoming",
    "switch",
    "switch to",
    "pivot",
    "move into",
    "career change",
];

/// Phrases that ask what to study.
const LEARNING_CUES: &[&str] = &[
    "learn",
    "learning plan",
    "roadmap",
    "path to",
    "study",
    "upskill",
    "prepare for",
];

/// Words that mark the next role as the source of a transition.
const SOURCE_MARKERS: &[&str] = &["from"];
/// Words that mark the next role as the target of a transition.
const TARGET_MARKERS: &[&str] = &["to", "become", "into"];
/// Skipped when looking for a marker before a role.
const FILLER: &[&str] = &["a", "an", "the", "my", "current", "senior", "junior"];

fn from_to_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\bfrom\b.+\bto\b").ok())
        .as_ref()
}

fn has_cue(normalized: &str, cues: &[&str]) -> bool {
    let padded = format!(" {normalized} ");
    cues.iter().any(|cue| padded.contains(&format!(" {cue} ")))
}

/// Classify normalized query text given the entities found in it.
pub fn classify(normalized: &str, entities: &[ResolvedEntity]) -> QueryIntent {
    let from_to = from_to_pattern().is_some_and(|p| p.is_match(normalized));
    if from_to || has_cue(normalized, TRANSITION_CUES) {
        return QueryIntent::TransitionPath;
    }
    if has_cue(normalized, LEARNING_CUES) {
        return QueryIntent::LearningPlan;
    }
    if entities.iter().any(|e| e.entity_type == EntityType::Skill) {
        return QueryIntent::SkillInfo;
    }
    if entities.iter().any(|e| e.entity_type == EntityType::Role) {
        return QueryIntent::RoleInfo;
    }
    QueryIntent::Unknown
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Source,
    Target,
}

/// The marker word right before `start`, skipping filler.
fn marker_before(tokens: &[&str], start: usize) -> Option<Marker> {
    let word = tokens[..start]
        .iter()
        .rev()
        .copied()
        .find(|t| !FILLER.contains(t))?;
    if SOURCE_MARKERS.contains(&word) {
        Some(Marker::Source)
    } else if TARGET_MARKERS.contains(&word) {
        Some(Marker::Target)
    } else {
        None
    }
}

/// Source and target roles of a transition question.
///
/// Explicit markers win. Otherwise the first role is the source and the
/// last the target; a lone role is the target.
pub fn endpoints(tokens: &[&str], entities: &[ResolvedEntity]) -> (Option<String>, Option<String>) {
    let roles: Vec<&ResolvedEntity> = entities
        .iter()
        .filter(|e| e.entity_type == EntityType::Role)
        .collect();

    let marked = |m: Marker| {
        roles
            .iter()
            .find(|r| marker_before(tokens, r.span.0) == Some(m))
            .map(|r| r.name.clone())
    };
    let mut source = marked(Marker::Source);
    let mut target = marked(Marker::Target);

    match (&source, &target) {
        (None, None) => match roles.as_slice() {
            [] => {}
            [only] => target = Some(only.name.clone()),
            [first, .., last] => {
                source = Some(first.name.clone());
                target = Some(last.name.clone());
            }
        },
        (Some(s), None) => {
            target = roles.iter().rev().find(|r| &r.name != s).map(|r| r.name.clone());
        }
        (None, Some(t)) => {
            source = roles.iter().find(|r| &r.name != t).map(|r| r.name.clone());
        }
        (Some(_), Some(_)) => {}
    }

    if source.is_some() && source == target {
        source = None;
    }
    (source, target)
}
