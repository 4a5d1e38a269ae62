use serde::{Deserialize, Serialize};

use super::defaults;

/// Path finder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Maximum number of hops in a transition path.
    pub max_depth: usize,
    /// Cap on complete paths enumerated per search.
    pub max_paths: usize,
    /// Score weight per hop.
    pub length_weight: f64,
    /// Score weight per skill to learn along the path.
    pub skill_gap_weight: f64,
    /// Score weight applied to `1 - edge weight` per hop.
    pub edge_weight: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::DEFAULT_MAX_PATH_DEPTH,
            max_paths: defaults::DEFAULT_MAX_ENUMERATED_PATHS,
            length_weight: defaults::DEFAULT_LENGTH_WEIGHT,
            skill_gap_weight: defaults::DEFAULT_SKILL_GAP_WEIGHT,
            edge_weight: defaults::DEFAULT_EDGE_WEIGHT,
        }
    }
}
