//! Layered configuration: every section defaults, TOML overrides what it names.

pub mod cache_config;
pub mod defaults;
pub mod observability_config;
pub mod path_config;
pub mod resolver_config;
pub mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CareerError, CareerResult};

pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;
pub use path_config::PathConfig;
pub use resolver_config::ResolverConfig;
pub use retrieval_config::RetrievalConfig;

/// Top-level configuration for the retrieval engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerConfig {
    pub resolver: ResolverConfig,
    pub paths: PathConfig,
    pub retrieval: RetrievalConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl CareerConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(input: &str) -> CareerResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CareerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CareerError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&raw)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> CareerResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> CareerResult<()> {
        let threshold = self.resolver.fuzzy_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CareerError::ConfigError {
                reason: format!("resolver.fuzzy_threshold must be in [0, 1], got {threshold}"),
            });
        }
        if self.paths.max_depth == 0 {
            return Err(CareerError::ConfigError {
                reason: "paths.max_depth must be at least 1".to_string(),
            });
        }
        if self.paths.max_paths == 0 {
            return Err(CareerError::ConfigError {
                reason: "paths.max_paths must be at least 1".to_string(),
            });
        }
        if self.retrieval.passages_per_query == 0 {
            return Err(CareerError::ConfigError {
                reason: "retrieval.passages_per_query must be at least 1".to_string(),
            });
        }
        if self.cache.capacity == 0 {
            return Err(CareerError::ConfigError {
                reason: "cache.capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
