use serde::{Deserialize, Serialize};

use super::EdgeType;

/// Everything a role points at, one list per edge type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleProfile {
    pub name: String,
    /// Levels connected by `REQUIRES_LEVEL`. Absence means not applicable.
    pub levels: Vec<String>,
    pub responsibilities: Vec<String>,
    pub principles: Vec<String>,
    pub skills: Vec<String>,
    pub communication_scopes: Vec<String>,
    pub impacts: Vec<String>,
}

impl RoleProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the role has a `REQUIRES_SKILL` edge to `skill` (case-insensitive).
    pub fn requires_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }

    /// Whether `level` applies to this role.
    pub fn has_level(&self, level: &str) -> bool {
        self.levels.iter().any(|l| l.eq_ignore_ascii_case(level))
    }

    /// Targets of the given edge type. `LEADS_TO` is not part of a profile.
    pub fn targets(&self, edge: EdgeType) -> &[String] {
        match edge {
            EdgeType::RequiresLevel => &self.levels,
            EdgeType::Requires => &self.responsibilities,
            EdgeType::FollowsPrinciple => &self.principles,
            EdgeType::RequiresSkill => &self.skills,
            EdgeType::CommunicatesWith => &self.communication_scopes,
            EdgeType::Impacts => &self.impacts,
            EdgeType::LeadsTo => &[],
        }
    }
}

/// Reverse view of a skill: which roles require it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillProfile {
    pub name: String,
    pub required_by_roles: Vec<String>,
}

/// One outgoing `LEADS_TO` edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub target: String,
    /// Transition strength in [0, 1], when the graph carries one.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl Transition {
    pub fn new(target: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            target: target.into(),
            weight,
        }
    }
}
