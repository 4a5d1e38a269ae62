//! # career-paths
//!
//! Role-transition path finding.
//!
//! ```text
//! snapshot::load (async, one adapter round per BFS level)
//!   └── TransitionSnapshot (petgraph DiGraph, immutable)
//! PathFinder (sync, bounded)
//!   ├── enumerate: bounded BFS over simple paths
//!   ├── gap: per-hop skill differences
//!   └── scoring: length + skill gap + edge weight, lexicographic tie-break
//! ```

pub mod finder;
pub mod gap;
pub mod scoring;
pub mod snapshot;

pub use finder::PathFinder;
pub use snapshot::TransitionSnapshot;
