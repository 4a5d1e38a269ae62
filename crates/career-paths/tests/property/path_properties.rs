//! Property tests for career-paths: simple paths, depth bound, determinism,
//! and agreement with plain reachability.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use career_core::config::PathConfig;
use career_paths::{PathFinder, TransitionSnapshot};

fn role(i: usize) -> String {
    format!("R{i:02}")
}

/// Build a random (possibly cyclic) transition graph with `n` roles.
fn build_snapshot(n: usize, edges: &[(usize, usize, f64)]) -> TransitionSnapshot {
    let mut snapshot = TransitionSnapshot::new();
    for i in 0..n {
        snapshot.ensure_role(&role(i));
    }
    for &(a, b, w) in edges {
        if a < n && b < n && a != b {
            snapshot.add_transition(&role(a), &role(b), Some(w));
        }
    }
    snapshot
}

/// Shortest hop count from `source` to `target`, if any.
fn hop_distance(snapshot: &TransitionSnapshot, source: &str, target: &str) -> Option<usize> {
    let start = snapshot.node(source)?;
    let goal = snapshot.node(target)?;
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0usize)]);
    while let Some((node, dist)) = queue.pop_front() {
        if node == goal {
            return Some(dist);
        }
        for next in snapshot.sorted_successors(node) {
            if seen.insert(next) {
                queue.push_back((next, dist + 1));
            }
        }
    }
    None
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((0..n, 0..n, 0.1_f64..1.0_f64), 0..n * 3)
}

proptest! {
    #[test]
    fn paths_are_simple_and_bounded(
        edges in edge_strategy(8),
        max_depth in 1usize..5,
        src in 0usize..8,
        dst in 0usize..8,
    ) {
        let snapshot = build_snapshot(8, &edges);
        let finder = PathFinder::new(&PathConfig { max_depth, ..Default::default() });
        let (source, target) = (role(src), role(dst));
        let outcome = finder.find(&snapshot, Some(&source), &target);

        for path in outcome.paths() {
            prop_assert!(path.len() <= max_depth);
            prop_assert_eq!(path.hops.len() + 1, path.roles.len());
            prop_assert_eq!(path.source(), Some(source.as_str()));
            prop_assert_eq!(path.target(), Some(target.as_str()));
            let distinct: HashSet<&String> = path.roles.iter().collect();
            prop_assert_eq!(distinct.len(), path.roles.len(), "repeated role in {}", path.display());
        }
    }

    #[test]
    fn found_iff_reachable_within_depth(
        edges in edge_strategy(8),
        max_depth in 1usize..5,
        src in 0usize..8,
        dst in 0usize..8,
    ) {
        prop_assume!(src != dst);
        let snapshot = build_snapshot(8, &edges);
        let finder = PathFinder::new(&PathConfig { max_depth, ..Default::default() });
        let (source, target) = (role(src), role(dst));
        let reachable = hop_distance(&snapshot, &source, &target)
            .is_some_and(|d| d <= max_depth);
        let outcome = finder.find(&snapshot, Some(&source), &target);
        prop_assert_eq!(!outcome.paths().is_empty(), reachable);
        prop_assert_eq!(outcome.is_no_path(), !reachable);
    }

    #[test]
    fn ranking_is_sorted_and_deterministic(
        edges in edge_strategy(8),
        dst in 0usize..8,
    ) {
        let snapshot = build_snapshot(8, &edges);
        let finder = PathFinder::default();
        let target = role(dst);
        let first = finder.find(&snapshot, None, &target);
        let second = finder.find(&snapshot, None, &target);
        prop_assert_eq!(&first, &second);

        for pair in first.paths().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.score < b.score || (a.score == b.score && a.roles < b.roles),
                "{} ({}) ranked before {} ({})", a.display(), a.score, b.display(), b.score
            );
        }
    }
}
