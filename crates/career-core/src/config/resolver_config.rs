use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Entity resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum similarity for a fuzzy match to count.
    pub fuzzy_threshold: f64,
    /// Vocabulary terms shorter than this never fuzzy-match.
    pub min_fuzzy_chars: usize,
    /// Extra aliases: alias phrase → canonical role or skill name.
    /// Merged over the built-in alias table.
    pub aliases: BTreeMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: defaults::DEFAULT_FUZZY_THRESHOLD,
            min_fuzzy_chars: defaults::DEFAULT_MIN_FUZZY_CHARS,
            aliases: BTreeMap::new(),
        }
    }
}
