//! Test fixtures for the career retrieval engine.
//!
//! Typed loading of the fixture JSON files, plus in-memory implementations of
//! the adapter traits with call counters and switchable faults, so crates can
//! exercise coalescing, timeouts and degraded modes without external services.

pub mod documents;
pub mod embedder;
pub mod faults;
pub mod ontology;
pub mod seed;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

pub use documents::InMemoryDocumentIndex;
pub use embedder::HashingEmbedder;
pub use faults::{CallCounter, Fault, FaultSwitch};
pub use ontology::InMemoryOntology;
pub use seed::{SeedChunk, SeedCorpus, SeedGraph, SeedTransition};

/// Relative path of the seed ontology.
pub const SEED_GRAPH: &str = "ontology/seed_graph.json";
/// Relative path of the seed document corpus.
pub const SEED_CORPUS: &str = "documents/corpus.json";

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The seed ontology.
pub fn seed_graph() -> SeedGraph {
    load_fixture(SEED_GRAPH)
}

/// The seed document corpus.
pub fn seed_corpus() -> SeedCorpus {
    load_fixture(SEED_CORPUS)
}
