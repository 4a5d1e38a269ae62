//! # career-retrieval
//!
//! Hybrid retrieval over a role ontology graph and a document index.
//!
//! ```text
//! answer_query(raw)
//!   ├── resolver: normalize → exact / alias / fuzzy matchers → intent, endpoints
//!   ├── fingerprint: blake3(normalized, entities, intent, generation stamps)
//!   └── cache (moka, single-flight) ── miss ──► build
//!         ├── search::paths      snapshot + PathFinder (path intents only)
//!         ├── search::documents  embed + search per sub-query
//!         ├── search::facts      role and skill profiles
//!         ├── status             OK / DEGRADED / RetrievalUnavailable
//!         └── fusion             dedup → entity boost → token budget
//! ```

pub mod cache;
pub mod fingerprint;
pub mod fusion;
pub mod orchestrator;
pub mod render;
pub mod resolver;
pub mod search;
pub mod status;

pub use cache::{CacheOutcome, ContextCache};
pub use orchestrator::RetrievalOrchestrator;
pub use render::render_context;
pub use resolver::EntityResolver;
