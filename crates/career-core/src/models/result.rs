use serde::{Deserialize, Serialize};

use super::{DegradationEvent, PathOutcome, QueryIntent, ResolvedEntity, SourceMetadata};
use crate::generation::GenerationSnapshot;
use crate::ontology::{RoleProfile, SkillProfile};

/// Structured facts pulled from the ontology graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFacts {
    pub roles: Vec<RoleProfile>,
    pub skills: Vec<SkillProfile>,
}

impl GraphFacts {
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty() && self.skills.is_empty()
    }

    pub fn role(&self, name: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.name.eq_ignore_ascii_case(name))
    }

    pub fn skill(&self, name: &str) -> Option<&SkillProfile> {
        self.skills.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Whether the facts contain `role REQUIRES_SKILL skill`.
    pub fn role_requires_skill(&self, role: &str, skill: &str) -> bool {
        self.role(role).is_some_and(|r| r.requires_skill(skill))
    }
}

/// A supporting passage after fusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub chunk_id: String,
    pub text: String,
    /// Raw similarity from the index.
    pub similarity: f64,
    /// Similarity plus entity boost; the ranking key.
    pub score: f64,
    pub entity_match: bool,
    pub source: SourceMetadata,
    /// Token cost charged against the context budget.
    pub tokens: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetrievalStatus {
    /// Every adapter class that was called answered at least once.
    Ok,
    /// One adapter class failed entirely; the result comes from the other.
    Degraded,
}

/// The composite answer to one query. Shared immutably once cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub fingerprint: String,
    pub intent: QueryIntent,
    pub entities: Vec<ResolvedEntity>,
    pub facts: GraphFacts,
    pub paths: PathOutcome,
    pub passages: Vec<Passage>,
    pub status: RetrievalStatus,
    pub generations: GenerationSnapshot,
    /// Whether the context budget dropped passages or paths.
    pub truncated: bool,
    pub degradations: Vec<DegradationEvent>,
}

impl RetrievalResult {
    pub fn is_degraded(&self) -> bool {
        self.status == RetrievalStatus::Degraded
    }

    /// Passages whose source document is `source`.
    pub fn passages_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Passage> {
        self.passages.iter().filter(move |p| p.source.source == source)
    }
}
