//! Immutable adjacency snapshot of the `LEADS_TO` subgraph.
//!
//! Fetched once per path search so traversal never goes back to the adapter.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::Duration;

use futures::future::join_all;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::debug;

use career_core::errors::CareerResult;
use career_core::guard::{guarded, AdapterClass};
use career_core::traits::IOntologyGraph;

/// Node payload: a role and the skills it requires.
#[derive(Debug, Clone)]
pub struct RoleNode {
    pub name: String,
    pub skills: BTreeSet<String>,
}

/// Role graph restricted to transitions, with an O(1) name → index map.
#[derive(Debug, Clone, Default)]
pub struct TransitionSnapshot {
    graph: DiGraph<RoleNode, Option<f64>>,
    index: HashMap<String, NodeIndex>,
}

impl TransitionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role, or return the existing node.
    pub fn ensure_role(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(RoleNode {
            name: name.to_string(),
            skills: BTreeSet::new(),
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Replace the skill set of a role, adding the role if needed.
    pub fn set_skills<I, S>(&mut self, name: &str, skills: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let idx = self.ensure_role(name);
        self.graph[idx].skills = skills.into_iter().map(Into::into).collect();
    }

    /// Add a `LEADS_TO` edge. Duplicate edges are ignored.
    pub fn add_transition(&mut self, from: &str, to: &str, weight: Option<f64>) {
        let a = self.ensure_role(from);
        let b = self.ensure_role(to);
        if self.graph.find_edge(a, b).is_none() {
            self.graph.add_edge(a, b, weight);
        }
    }

    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    pub fn role(&self, idx: NodeIndex) -> &RoleNode {
        &self.graph[idx]
    }

    pub fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].name
    }

    pub fn edge_weight(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        self.graph
            .find_edge(from, to)
            .and_then(|e| self.graph.edge_weight(e).copied().flatten())
    }

    /// Successors ordered by role name, so enumeration is deterministic.
    pub fn sorted_successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut next: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .collect();
        next.sort_by(|a, b| self.graph[*a].name.cmp(&self.graph[*b].name));
        next.dedup();
        next
    }

    /// All roles ordered by name.
    pub fn sorted_roles(&self) -> Vec<NodeIndex> {
        let mut all: Vec<NodeIndex> = self.graph.node_indices().collect();
        all.sort_by(|a, b| self.graph[*a].name.cmp(&self.graph[*b].name));
        all
    }

    pub fn role_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn transition_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Fetch the part of the role graph a search can reach.
///
/// With a source, expands breadth-first from it for `max_depth` levels; without
/// one, starts from every role. Each role's transitions and profile are fetched
/// at most once, and calls within a level run concurrently. Any failed call
/// fails the whole load: a partial snapshot would rank paths wrongly.
pub async fn load(
    graph: &dyn IOntologyGraph,
    source: Option<&str>,
    max_depth: usize,
    timeout: Duration,
) -> CareerResult<TransitionSnapshot> {
    let mut snapshot = TransitionSnapshot::new();

    let starts: Vec<String> = match source {
        Some(s) => vec![s.to_string()],
        None => {
            let mut names =
                guarded(AdapterClass::Graph, "role_names", timeout, graph.role_names()).await?;
            names.sort();
            names.dedup();
            names
        }
    };

    let mut visited: HashSet<String> = starts.iter().cloned().collect();
    for name in &starts {
        snapshot.ensure_role(name);
    }

    let mut frontier = starts;
    for depth in 0..max_depth {
        if frontier.is_empty() {
            break;
        }

        let calls = frontier.iter().map(|name| {
            guarded(
                AdapterClass::Graph,
                "outgoing_transitions",
                timeout,
                graph.outgoing_transitions(name),
            )
        });
        let responses = join_all(calls).await;

        let mut next = Vec::new();
        for (from, response) in frontier.iter().zip(responses) {
            for transition in response? {
                snapshot.add_transition(from, &transition.target, transition.weight);
                if visited.insert(transition.target.clone()) {
                    next.push(transition.target);
                }
            }
        }
        debug!(depth, discovered = next.len(), "snapshot level loaded");
        frontier = next;
    }

    let names: Vec<String> = snapshot
        .sorted_roles()
        .into_iter()
        .map(|idx| snapshot.name(idx).to_string())
        .collect();
    let profiles = join_all(names.iter().map(|name| {
        guarded(
            AdapterClass::Graph,
            "role_profile",
            timeout,
            graph.role_profile(name),
        )
    }))
    .await;

    for (name, profile) in names.iter().zip(profiles) {
        if let Some(profile) = profile? {
            snapshot.set_skills(name, profile.skills);
        }
    }

    debug!(
        roles = snapshot.role_count(),
        transitions = snapshot.transition_count(),
        "transition snapshot loaded"
    );
    Ok(snapshot)
}
