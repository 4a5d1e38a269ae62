//! Transition path search for path-seeking intents.

use std::time::Duration;

use tracing::warn;

use career_core::guard::AdapterClass;
use career_core::models::{PathOutcome, ResolvedQuery};
use career_core::traits::IOntologyGraph;
use career_paths::{snapshot, PathFinder};

use super::CallRecord;

/// Load a snapshot around the endpoints and rank paths to the target.
///
/// Not requested unless the intent asks for a path and a target role was
/// resolved. A failed snapshot load yields `Unavailable`, never an error.
pub async fn find(
    graph: &dyn IOntologyGraph,
    finder: &PathFinder,
    query: &ResolvedQuery,
    timeout: Duration,
) -> (PathOutcome, Option<CallRecord>) {
    let Some(target) = query.target_role.as_deref() else {
        return (PathOutcome::NotRequested, None);
    };
    if !query.intent.wants_path() {
        return (PathOutcome::NotRequested, None);
    }
    let source = query.source_role.as_deref();

    match snapshot::load(graph, source, finder.max_depth(), timeout).await {
        Ok(snap) => (
            finder.find(&snap, source, target),
            Some(CallRecord::ok(AdapterClass::Graph, "transition_snapshot", target)),
        ),
        Err(e) => {
            warn!(?source, target, error = %e, "transition snapshot load failed");
            (
                PathOutcome::Unavailable,
                Some(CallRecord::failed(
                    AdapterClass::Graph,
                    "transition_snapshot",
                    target,
                    &e,
                )),
            )
        }
    }
}
