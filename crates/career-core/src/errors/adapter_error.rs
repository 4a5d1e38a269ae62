/// Failures of a single call to an external adapter.
///
/// These are absorbed by the orchestrator and degrade result quality;
/// they only surface when every adapter call of a request failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AdapterError {
    #[error("{adapter} adapter timed out after {timeout_ms}ms during {operation}")]
    Timeout {
        adapter: String,
        operation: String,
        timeout_ms: u64,
    },

    #[error("{adapter} adapter unavailable: {reason}")]
    Unavailable { adapter: String, reason: String },

    #[error("{adapter} adapter returned an invalid response: {reason}")]
    InvalidResponse { adapter: String, reason: String },
}

impl AdapterError {
    /// Whether this failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
