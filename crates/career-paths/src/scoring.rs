//! Path scoring. Lower is better.

use std::cmp::Ordering;

use career_core::config::PathConfig;
use career_core::models::TransitionPath;

/// Weights for the three scoring factors.
#[derive(Debug, Clone, Copy)]
pub struct PathWeights {
    pub length: f64,
    pub skill_gap: f64,
    pub edge: f64,
}

impl From<&PathConfig> for PathWeights {
    fn from(config: &PathConfig) -> Self {
        Self {
            length: config.length_weight,
            skill_gap: config.skill_gap_weight,
            edge: config.edge_weight,
        }
    }
}

impl Default for PathWeights {
    fn default() -> Self {
        Self::from(&PathConfig::default())
    }
}

/// Weighted sum of hop count, total skill gap, and missing edge strength.
/// A hop without a weight counts as full strength.
pub fn score(path: &TransitionPath, weights: &PathWeights) -> f64 {
    let hops = path.hops.len() as f64;
    let gap = path.total_skill_gap as f64;
    let edge_penalty: f64 = path
        .hops
        .iter()
        .map(|h| 1.0 - h.weight.unwrap_or(1.0).clamp(0.0, 1.0))
        .sum();

    weights.length * hops + weights.skill_gap * gap + weights.edge * edge_penalty
}

/// Score ascending, then role sequence lexicographically.
pub fn compare(a: &TransitionPath, b: &TransitionPath) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.roles.cmp(&b.roles))
}

/// Score every path and sort best first.
pub fn rank(paths: &mut [TransitionPath], weights: &PathWeights) {
    for path in paths.iter_mut() {
        path.score = score(path, weights);
    }
    paths.sort_by(compare);
}
