// Single source of truth for all default values.

// --- Resolver ---
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;
pub const DEFAULT_MIN_FUZZY_CHARS: usize = 4;

// --- Paths ---
pub const DEFAULT_MAX_PATH_DEPTH: usize = 3;
pub const DEFAULT_MAX_ENUMERATED_PATHS: usize = 20;
pub const DEFAULT_LENGTH_WEIGHT: f64 = 1.0;
pub const DEFAULT_SKILL_GAP_WEIGHT: f64 = 0.5;
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

// --- Retrieval ---
pub const DEFAULT_PASSAGES_PER_QUERY: usize = 5;
pub const DEFAULT_CONTEXT_BUDGET_TOKENS: usize = 1_500;
pub const DEFAULT_ENTITY_MATCH_BOOST: f64 = 0.15;
pub const DEFAULT_GRAPH_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_DOCUMENT_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_MAX_QUERY_CHARS: usize = 1_000;
pub const DEFAULT_RETRY_AFTER_MS: u64 = 5_000;

// --- Cache ---
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_024;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600; // 1 hour

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
