mod adapter_error;
mod cache_error;

use std::sync::Arc;

pub use adapter_error::AdapterError;
pub use cache_error::CacheError;

/// Convenience alias used throughout the workspace.
pub type CareerResult<T> = Result<T, CareerError>;

/// Top-level error for the career retrieval engine.
#[derive(Debug, thiserror::Error)]
pub enum CareerError {
    #[error("invalid query: {reason}")]
    Validation { reason: String },

    #[error(
        "retrieval unavailable: all {failures} adapter calls failed, retry after {retry_after_ms}ms"
    )]
    RetrievalUnavailable { failures: usize, retry_after_ms: u64 },

    #[error("adapter error: {0}")]
    AdapterError(#[from] AdapterError),

    #[error("cache error: {0}")]
    CacheError(#[from] CacheError),

    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("tokenizer unavailable: {reason}")]
    TokenizerUnavailable { reason: String },

    #[error("shared computation failed: {message}")]
    SharedBuildFailed { message: String },
}

impl CareerError {
    /// Recover an owned error from one shared between single-flight waiters.
    pub fn from_shared(err: Arc<CareerError>) -> Self {
        match Arc::try_unwrap(err) {
            Ok(owned) => owned,
            Err(shared) => match shared.as_ref() {
                Self::Validation { reason } => Self::Validation {
                    reason: reason.clone(),
                },
                Self::RetrievalUnavailable {
                    failures,
                    retry_after_ms,
                } => Self::RetrievalUnavailable {
                    failures: *failures,
                    retry_after_ms: *retry_after_ms,
                },
                Self::AdapterError(e) => Self::AdapterError(e.clone()),
                Self::CacheError(e) => Self::CacheError(e.clone()),
                other => Self::SharedBuildFailed {
                    message: other.to_string(),
                },
            },
        }
    }

    /// Retry hint in milliseconds, if the failure is transient.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::RetrievalUnavailable { retry_after_ms, .. } => Some(*retry_after_ms),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for CareerError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigError {
            reason: e.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CareerError {
    fn from(e: toml::ser::Error) -> Self {
        Self::ConfigError {
            reason: e.to_string(),
        }
    }
}
