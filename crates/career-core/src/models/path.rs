use serde::{Deserialize, Serialize};

/// Skill difference between two consecutive roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    /// Required by the next role but not the current one.
    pub to_learn: Vec<String>,
    /// Required by both.
    pub to_maintain: Vec<String>,
    /// Required by the current role only.
    pub to_phase_out: Vec<String>,
}

impl SkillGap {
    /// Gap size used for scoring.
    pub fn size(&self) -> usize {
        self.to_learn.len()
    }
}

/// One `LEADS_TO` step of a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathHop {
    pub from: String,
    pub to: String,
    pub weight: Option<f64>,
    pub gap: SkillGap,
}

/// A scored simple path through the role graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionPath {
    /// Role sequence, source first. Pairwise distinct.
    pub roles: Vec<String>,
    pub hops: Vec<PathHop>,
    pub total_skill_gap: usize,
    /// Composite score; lower ranks first.
    pub score: f64,
}

impl TransitionPath {
    /// Number of hops.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn source(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }

    pub fn target(&self) -> Option<&str> {
        self.roles.last().map(String::as_str)
    }

    /// `A -> B -> C`.
    pub fn display(&self) -> String {
        self.roles.join(" -> ")
    }
}

/// What the path finder produced for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathOutcome {
    /// The intent did not ask for a path, or no target role was resolved.
    NotRequested,
    /// Ranked paths, best first. Never empty.
    Found { paths: Vec<TransitionPath> },
    /// No route within the depth bound. Not an error.
    NoPath {
        source: Option<String>,
        target: String,
        max_depth: usize,
    },
    /// The ontology graph could not be read.
    Unavailable,
}

impl PathOutcome {
    pub fn paths(&self) -> &[TransitionPath] {
        match self {
            Self::Found { paths } => paths,
            _ => &[],
        }
    }

    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPath { .. })
    }

    pub fn best(&self) -> Option<&TransitionPath> {
        self.paths().first()
    }
}
