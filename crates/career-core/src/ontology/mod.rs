//! Role ontology: entity kinds, edge types, and the read-only profiles the
//! ontology graph adapter hands back.

mod profile;

use serde::{Deserialize, Serialize};

pub use profile::{RoleProfile, SkillProfile, Transition};

/// The seven entity kinds in the role ontology.
/// Names are unique within a kind and act as primary keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Role,
    Level,
    Responsibility,
    CorePrinciple,
    Skill,
    ScopeOfCommunication,
    Impact,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        Self::Role,
        Self::Level,
        Self::Responsibility,
        Self::CorePrinciple,
        Self::Skill,
        Self::ScopeOfCommunication,
        Self::Impact,
    ];

    /// Node label as used by the graph store.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Role => "Role",
            Self::Level => "Level",
            Self::Responsibility => "Responsibility",
            Self::CorePrinciple => "CorePrinciple",
            Self::Skill => "Skill",
            Self::ScopeOfCommunication => "ScopeOfCommunication",
            Self::Impact => "Impact",
        }
    }
}

/// Typed directed edges. Every edge starts at a Role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    RequiresLevel,
    Requires,
    FollowsPrinciple,
    RequiresSkill,
    CommunicatesWith,
    Impacts,
    LeadsTo,
}

impl EdgeType {
    pub const ALL: [EdgeType; 7] = [
        Self::RequiresLevel,
        Self::Requires,
        Self::FollowsPrinciple,
        Self::RequiresSkill,
        Self::CommunicatesWith,
        Self::Impacts,
        Self::LeadsTo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequiresLevel => "REQUIRES_LEVEL",
            Self::Requires => "REQUIRES",
            Self::FollowsPrinciple => "FOLLOWS_PRINCIPLE",
            Self::RequiresSkill => "REQUIRES_SKILL",
            Self::CommunicatesWith => "COMMUNICATES_WITH",
            Self::Impacts => "IMPACTS",
            Self::LeadsTo => "LEADS_TO",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == s)
    }

    /// Kind of the node this edge points at.
    pub fn target_kind(&self) -> EntityKind {
        match self {
            Self::RequiresLevel => EntityKind::Level,
            Self::Requires => EntityKind::Responsibility,
            Self::FollowsPrinciple => EntityKind::CorePrinciple,
            Self::RequiresSkill => EntityKind::Skill,
            Self::CommunicatesWith => EntityKind::ScopeOfCommunication,
            Self::Impacts => EntityKind::Impact,
            Self::LeadsTo => EntityKind::Role,
        }
    }
}
