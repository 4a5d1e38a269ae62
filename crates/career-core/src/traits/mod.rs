//! Contracts for the external collaborators. All read-only from the core's
//! point of view.

mod document_index;
mod ontology_graph;
mod query_embedder;

pub use document_index::IDocumentIndex;
pub use ontology_graph::IOntologyGraph;
pub use query_embedder::IQueryEmbedder;
