/// Context cache errors. Never surfaced to callers of `answer_query`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    #[error("cache entry for {fingerprint} is corrupt: {details}")]
    Corruption {
        fingerprint: String,
        details: String,
    },
}
