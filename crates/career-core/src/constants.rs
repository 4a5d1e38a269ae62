/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on path search depth, regardless of configuration.
pub const MAX_PATH_DEPTH_CEILING: usize = 8;

/// Hard ceiling on enumerated transition paths, regardless of configuration.
pub const MAX_ENUMERATED_PATHS_CEILING: usize = 500;

/// Adapter name reported for the ontology graph class.
pub const GRAPH_ADAPTER: &str = "graph";

/// Adapter name reported for the document index class.
pub const DOCUMENT_ADAPTER: &str = "documents";
