//! # career-core
//!
//! Foundation crate for the career retrieval engine.
//! Defines the ontology and query models, the adapter traits for the external
//! ontology graph and document index, errors, config, and generation stamps.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod generation;
pub mod guard;
pub mod models;
pub mod ontology;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CareerConfig;
pub use errors::{CareerError, CareerResult};
pub use generation::{GenerationSnapshot, GenerationStamps};
pub use models::{EntityType, QueryIntent, ResolvedEntity, ResolvedQuery, RetrievalResult};
pub use ontology::{RoleProfile, SkillProfile, Transition};
