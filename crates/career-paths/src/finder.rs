//! PathFinder: bounded enumeration of simple role-transition paths.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use tracing::debug;

use career_core::config::PathConfig;
use career_core::constants::{MAX_ENUMERATED_PATHS_CEILING, MAX_PATH_DEPTH_CEILING};
use career_core::models::{PathHop, PathOutcome, TransitionPath};

use crate::gap;
use crate::scoring::{self, PathWeights};
use crate::snapshot::TransitionSnapshot;

/// Finds and ranks transition paths over a `TransitionSnapshot`.
#[derive(Debug, Clone)]
pub struct PathFinder {
    max_depth: usize,
    max_paths: usize,
    weights: PathWeights,
}

impl PathFinder {
    pub fn new(config: &PathConfig) -> Self {
        Self {
            max_depth: config.max_depth.clamp(1, MAX_PATH_DEPTH_CEILING),
            max_paths: config.max_paths.clamp(1, MAX_ENUMERATED_PATHS_CEILING),
            weights: PathWeights::from(config),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Ranked paths from `source` (or from any role when `None`) to `target`.
    ///
    /// Never fails: an unknown role or an unreachable target is `NoPath`.
    pub fn find(
        &self,
        snapshot: &TransitionSnapshot,
        source: Option<&str>,
        target: &str,
    ) -> PathOutcome {
        let no_path = || PathOutcome::NoPath {
            source: source.map(str::to_string),
            target: target.to_string(),
            max_depth: self.max_depth,
        };

        let Some(target_idx) = snapshot.node(target) else {
            debug!(target, "target role not in snapshot");
            return no_path();
        };

        let starts: Vec<NodeIndex> = match source {
            Some(name) => match snapshot.node(name) {
                Some(idx) if idx != target_idx => vec![idx],
                _ => return no_path(),
            },
            None => snapshot
                .sorted_roles()
                .into_iter()
                .filter(|idx| *idx != target_idx)
                .collect(),
        };

        let raw = self.enumerate(snapshot, &starts, target_idx);
        if raw.is_empty() {
            debug!(?source, target, max_depth = self.max_depth, "no path found");
            return no_path();
        }

        let mut paths: Vec<TransitionPath> = raw
            .iter()
            .map(|nodes| self.annotate(snapshot, nodes))
            .collect();
        scoring::rank(&mut paths, &self.weights);

        debug!(
            ?source,
            target,
            found = paths.len(),
            best = %paths[0].display(),
            "paths ranked"
        );
        PathOutcome::Found { paths }
    }

    /// Breadth-first enumeration of simple paths, shortest first.
    ///
    /// All starts are seeded together so the path cap keeps the globally
    /// shortest candidates. Stops once `max_paths` complete paths are found.
    fn enumerate(
        &self,
        snapshot: &TransitionSnapshot,
        starts: &[NodeIndex],
        target: NodeIndex,
    ) -> Vec<Vec<NodeIndex>> {
        let mut found = Vec::new();
        let mut queue: VecDeque<Vec<NodeIndex>> = starts.iter().map(|s| vec![*s]).collect();

        'search: while let Some(partial) = queue.pop_front() {
            let hops = partial.len() - 1;
            if hops >= self.max_depth {
                continue;
            }
            let Some(&last) = partial.last() else {
                continue;
            };

            for next in snapshot.sorted_successors(last) {
                if partial.contains(&next) {
                    continue;
                }
                let mut extended = partial.clone();
                extended.push(next);

                if next == target {
                    found.push(extended);
                    if found.len() >= self.max_paths {
                        break 'search;
                    }
                } else if hops + 1 < self.max_depth {
                    queue.push_back(extended);
                }
            }
        }

        found
    }

    /// Attach per-hop skill gaps and edge weights.
    fn annotate(&self, snapshot: &TransitionSnapshot, nodes: &[NodeIndex]) -> TransitionPath {
        let hops: Vec<PathHop> = nodes
            .windows(2)
            .map(|pair| {
                let (from, to) = (snapshot.role(pair[0]), snapshot.role(pair[1]));
                PathHop {
                    from: from.name.clone(),
                    to: to.name.clone(),
                    weight: snapshot.edge_weight(pair[0], pair[1]),
                    gap: gap::from_skill_sets(&from.skills, &to.skills),
                }
            })
            .collect();

        TransitionPath {
            roles: nodes.iter().map(|n| snapshot.name(*n).to_string()).collect(),
            total_skill_gap: hops.iter().map(|h| h.gap.size()).sum(),
            hops,
            score: 0.0,
        }
    }
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new(&PathConfig::default())
    }
}
