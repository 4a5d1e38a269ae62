use serde::{Deserialize, Serialize};

/// Entity types the resolver can produce.
///
/// Ordering matters: `Role < Skill` implements the role-before-skill tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Role,
    Skill,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Skill => "skill",
        }
    }
}

/// Which matcher produced an entity, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    Exact,
    Alias,
    Fuzzy,
}

/// A role or skill mention found in the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEntity {
    /// Canonical vocabulary name.
    pub name: String,
    pub entity_type: EntityType,
    /// Match confidence in [0, 1].
    pub confidence: f64,
    pub strategy: MatchStrategy,
    /// Token span `[start, end)` in the normalized query.
    pub span: (usize, usize),
}

/// Query intent classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryIntent {
    RoleInfo,
    SkillInfo,
    TransitionPath,
    LearningPlan,
    Unknown,
}

impl QueryIntent {
    pub const ALL: [QueryIntent; 5] = [
        Self::RoleInfo,
        Self::SkillInfo,
        Self::TransitionPath,
        Self::LearningPlan,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoleInfo => "ROLE_INFO",
            Self::SkillInfo => "SKILL_INFO",
            Self::TransitionPath => "TRANSITION_PATH",
            Self::LearningPlan => "LEARNING_PLAN",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Intents that ask for a route between roles.
    pub fn wants_path(&self) -> bool {
        matches!(self, Self::TransitionPath | Self::LearningPlan)
    }
}

/// The resolver's view of one request. Discarded once the request completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedQuery {
    pub raw: String,
    pub normalized: String,
    /// Entities in order of appearance.
    pub entities: Vec<ResolvedEntity>,
    pub intent: QueryIntent,
    /// Where a transition starts, when the query names one.
    pub source_role: Option<String>,
    /// Where a transition should end.
    pub target_role: Option<String>,
}

impl ResolvedQuery {
    pub fn roles(&self) -> impl Iterator<Item = &ResolvedEntity> {
        self.entities
            .iter()
            .filter(|e| e.entity_type == EntityType::Role)
    }

    pub fn skills(&self) -> impl Iterator<Item = &ResolvedEntity> {
        self.entities
            .iter()
            .filter(|e| e.entity_type == EntityType::Skill)
    }

    pub fn has_entities(&self) -> bool {
        !self.entities.is_empty()
    }

    /// Entity identities sorted and deduplicated, for fingerprinting.
    pub fn entity_keys(&self) -> Vec<(EntityType, String)> {
        let mut keys: Vec<(EntityType, String)> = self
            .entities
            .iter()
            .map(|e| (e.entity_type, e.name.clone()))
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}
