//! In-memory ontology graph adapter.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use career_core::constants::GRAPH_ADAPTER;
use career_core::errors::CareerResult;
use career_core::ontology::{RoleProfile, SkillProfile, Transition};
use career_core::traits::IOntologyGraph;

use crate::faults::{CallCounter, FaultSwitch};
use crate::seed::SeedGraph;

#[derive(Debug, Default)]
struct OntologyData {
    roles: BTreeMap<String, RoleProfile>,
    skills: Vec<String>,
    transitions: BTreeMap<String, Vec<Transition>>,
}

/// `IOntologyGraph` over a mutable in-memory graph.
///
/// Mutations stand in for an external reseed; tests bump the graph stamp
/// alongside them.
#[derive(Debug, Default)]
pub struct InMemoryOntology {
    data: RwLock<OntologyData>,
    calls: CallCounter,
    fault: FaultSwitch,
}

impl InMemoryOntology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedGraph) -> Self {
        let ontology = Self::new();
        {
            let mut data = ontology.data.write().unwrap();
            for role in seed.roles {
                data.roles.insert(role.name.clone(), role);
            }
            data.skills = seed.skills;
            for t in seed.transitions {
                data.transitions
                    .entry(t.from)
                    .or_default()
                    .push(Transition::new(t.to, t.weight));
            }
        }
        ontology
    }

    /// The seed ontology from `ontology/seed_graph.json`.
    pub fn seeded() -> Self {
        Self::from_seed(crate::seed_graph())
    }

    pub fn calls(&self) -> &CallCounter {
        &self.calls
    }

    pub fn fault(&self) -> &FaultSwitch {
        &self.fault
    }

    pub fn upsert_role(&self, role: RoleProfile) {
        let mut data = self.data.write().unwrap();
        for skill in &role.skills {
            if !data.skills.contains(skill) {
                data.skills.push(skill.clone());
            }
        }
        data.roles.insert(role.name.clone(), role);
    }

    pub fn add_transition(&self, from: &str, to: &str, weight: Option<f64>) {
        self.data
            .write()
            .unwrap()
            .transitions
            .entry(from.to_string())
            .or_default()
            .push(Transition::new(to, weight));
    }

    pub fn remove_transition(&self, from: &str, to: &str) {
        if let Some(edges) = self.data.write().unwrap().transitions.get_mut(from) {
            edges.retain(|t| t.target != to);
        }
    }

    /// Every `(from, to)` edge, sorted.
    pub fn transitions(&self) -> Vec<(String, String)> {
        let data = self.data.read().unwrap();
        let mut edges: Vec<(String, String)> = data
            .transitions
            .iter()
            .flat_map(|(from, ts)| ts.iter().map(move |t| (from.clone(), t.target.clone())))
            .collect();
        edges.sort();
        edges
    }

    async fn enter(&self, operation: &str) -> CareerResult<()> {
        self.calls.record(operation);
        self.fault.apply(GRAPH_ADAPTER).await
    }
}

#[async_trait]
impl IOntologyGraph for InMemoryOntology {
    async fn role_profile(&self, name: &str) -> CareerResult<Option<RoleProfile>> {
        self.enter("role_profile").await?;
        Ok(self.data.read().unwrap().roles.get(name).cloned())
    }

    async fn outgoing_transitions(&self, name: &str) -> CareerResult<Vec<Transition>> {
        self.enter("outgoing_transitions").await?;
        Ok(self
            .data
            .read()
            .unwrap()
            .transitions
            .get(name)
            .cloned()
            .unwrap_or_default())
    }

    async fn skill_profile(&self, name: &str) -> CareerResult<Option<SkillProfile>> {
        self.enter("skill_profile").await?;
        let data = self.data.read().unwrap();
        let required_by_roles: Vec<String> = data
            .roles
            .values()
            .filter(|r| r.skills.iter().any(|s| s == name))
            .map(|r| r.name.clone())
            .collect();
        if required_by_roles.is_empty() && !data.skills.iter().any(|s| s == name) {
            return Ok(None);
        }
        Ok(Some(SkillProfile {
            name: name.to_string(),
            required_by_roles,
        }))
    }

    async fn role_names(&self) -> CareerResult<Vec<String>> {
        self.enter("role_names").await?;
        Ok(self.data.read().unwrap().roles.keys().cloned().collect())
    }

    async fn skill_names(&self) -> CareerResult<Vec<String>> {
        self.enter("skill_names").await?;
        Ok(self.data.read().unwrap().skills.clone())
    }

    fn name(&self) -> &str {
        "in-memory-ontology"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faults::Fault;

    #[tokio::test]
    async fn seeded_graph_answers_profiles() {
        let graph = InMemoryOntology::seeded();
        let bi = graph.role_profile("BI Engineer").await.unwrap().unwrap();
        assert!(bi.requires_skill("SQL"));
        assert!(graph.role_profile("Astronaut").await.unwrap().is_none());

        let sql = graph.skill_profile("SQL").await.unwrap().unwrap();
        assert!(sql.required_by_roles.contains(&"BI Engineer".to_string()));
        assert!(graph.skill_profile("Juggling").await.unwrap().is_none());
        assert_eq!(graph.calls().count("role_profile"), 2);
    }

    #[tokio::test]
    async fn unavailable_fault_surfaces_as_error() {
        let graph = InMemoryOntology::seeded();
        graph.fault().set(Fault::Unavailable);
        assert!(graph.outgoing_transitions("Data Analyst").await.is_err());
        assert_eq!(graph.calls().count("outgoing_transitions"), 1);
    }

    #[tokio::test]
    async fn transitions_can_be_edited() {
        let graph = InMemoryOntology::seeded();
        graph.add_transition("Data Analyst", "Machine Learning Engineer", Some(0.4));
        let out = graph.outgoing_transitions("Data Analyst").await.unwrap();
        assert!(out.iter().any(|t| t.target == "Machine Learning Engineer"));
        graph.remove_transition("Data Analyst", "Machine Learning Engineer");
        let out = graph.outgoing_transitions("Data Analyst").await.unwrap();
        assert!(!out.iter().any(|t| t.target == "Machine Learning Engineer"));
    }
}
