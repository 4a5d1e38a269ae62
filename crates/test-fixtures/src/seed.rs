//! Shapes of the seed fixture files.

use serde::{Deserialize, Serialize};

use career_core::models::SourceMetadata;
use career_core::ontology::RoleProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTransition {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// `ontology/seed_graph.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedGraph {
    pub roles: Vec<RoleProfile>,
    pub skills: Vec<String>,
    pub transitions: Vec<SeedTransition>,
}

/// One chunk before embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedChunk {
    pub id: String,
    pub text: String,
    pub source: SourceMetadata,
}

/// `documents/corpus.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCorpus {
    pub chunks: Vec<SeedChunk>,
}
