//! Graph facts for each resolved role and skill.

use std::time::Duration;

use futures::future::join_all;
use tracing::warn;

use career_core::guard::{guarded, AdapterClass};
use career_core::models::{GraphFacts, ResolvedQuery};
use career_core::traits::IOntologyGraph;

use super::CallRecord;

pub async fn gather(
    graph: &dyn IOntologyGraph,
    query: &ResolvedQuery,
    timeout: Duration,
) -> (GraphFacts, Vec<CallRecord>) {
    let roles: Vec<&str> = query.roles().map(|e| e.name.as_str()).collect();
    let skills: Vec<&str> = query.skills().map(|e| e.name.as_str()).collect();

    let role_calls = join_all(
        roles
            .iter()
            .map(|name| guarded(AdapterClass::Graph, "role_profile", timeout, graph.role_profile(name))),
    );
    let skill_calls = join_all(
        skills
            .iter()
            .map(|name| guarded(AdapterClass::Graph, "skill_profile", timeout, graph.skill_profile(name))),
    );
    let (role_results, skill_results) = tokio::join!(role_calls, skill_calls);

    let mut facts = GraphFacts::default();
    let mut records = Vec::with_capacity(roles.len() + skills.len());

    for (name, result) in roles.iter().zip(role_results) {
        match result {
            Ok(profile) => {
                facts.roles.extend(profile);
                records.push(CallRecord::ok(AdapterClass::Graph, "role_profile", name));
            }
            Err(e) => {
                warn!(role = %name, error = %e, "role profile lookup failed");
                records.push(CallRecord::failed(AdapterClass::Graph, "role_profile", name, &e));
            }
        }
    }
    for (name, result) in skills.iter().zip(skill_results) {
        match result {
            Ok(profile) => {
                facts.skills.extend(profile);
                records.push(CallRecord::ok(AdapterClass::Graph, "skill_profile", name));
            }
            Err(e) => {
                warn!(skill = %name, error = %e, "skill profile lookup failed");
                records.push(CallRecord::failed(AdapterClass::Graph, "skill_profile", name, &e));
            }
        }
    }

    (facts, records)
}
