//! A cached result with the stamps and checksum it was stored under.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use career_core::errors::{CacheError, CareerResult};
use career_core::generation::GenerationSnapshot;
use career_core::models::RetrievalResult;

#[derive(Debug)]
pub struct CacheEntry {
    pub fingerprint: String,
    pub result: Arc<RetrievalResult>,
    pub generations: GenerationSnapshot,
    pub created_at: DateTime<Utc>,
    /// blake3 over the JSON-serialized result.
    pub checksum: String,
    last_accessed_ms: AtomicI64,
    /// Set once the checksum has matched; the result never changes after that.
    verified: AtomicBool,
}

impl CacheEntry {
    pub fn new(result: RetrievalResult) -> CareerResult<Self> {
        let checksum = checksum(&result)?;
        let now = Utc::now();
        Ok(Self {
            fingerprint: result.fingerprint.clone(),
            generations: result.generations,
            result: Arc::new(result),
            created_at: now,
            checksum,
            last_accessed_ms: AtomicI64::new(now.timestamp_millis()),
            verified: AtomicBool::new(false),
        })
    }

    pub fn touch(&self) {
        self.last_accessed_ms
            .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }

    pub fn last_accessed(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.last_accessed_ms.load(Ordering::Relaxed))
            .single()
            .unwrap_or(self.created_at)
    }

    pub fn is_verified(&self) -> bool {
        self.verified.load(Ordering::Acquire)
    }

    /// Check the entry against the key it was found under. The checksum is
    /// recomputed on the first successful check only.
    pub fn verify(&self, key: &str) -> Result<(), CacheError> {
        if self.fingerprint != key || self.result.fingerprint != key {
            return Err(CacheError::Corruption {
                fingerprint: key.to_string(),
                details: format!("stored under {key} but carries {}", self.fingerprint),
            });
        }
        if self.is_verified() {
            return Ok(());
        }
        let actual = checksum(&self.result).map_err(|e| CacheError::Corruption {
            fingerprint: key.to_string(),
            details: format!("result does not serialize: {e}"),
        })?;
        if actual != self.checksum {
            return Err(CacheError::Corruption {
                fingerprint: key.to_string(),
                details: "checksum mismatch".to_string(),
            });
        }
        self.verified.store(true, Ordering::Release);
        Ok(())
    }
}

/// blake3 hex digest of the JSON form of a result.
pub fn checksum(result: &RetrievalResult) -> CareerResult<String> {
    let bytes = serde_json::to_vec(result)?;
    Ok(blake3::hash(&bytes).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use career_core::models::{GraphFacts, PathOutcome, QueryIntent, RetrievalStatus};

    use super::*;

    fn entry(fingerprint: &str) -> CacheEntry {
        CacheEntry::new(RetrievalResult {
            fingerprint: fingerprint.to_string(),
            intent: QueryIntent::RoleInfo,
            entities: vec![],
            facts: GraphFacts::default(),
            paths: PathOutcome::NotRequested,
            passages: vec![],
            status: RetrievalStatus::Ok,
            generations: GenerationSnapshot::default(),
            truncated: false,
            degradations: vec![],
        })
        .unwrap()
    }

    #[test]
    fn checksum_is_checked_on_first_verify_only() {
        let entry = entry("abc");
        assert!(!entry.is_verified());
        entry.verify("abc").unwrap();
        assert!(entry.is_verified());
        entry.verify("abc").unwrap();
    }

    #[test]
    fn touch_never_moves_access_time_before_creation() {
        let entry = entry("abc");
        entry.touch();
        assert!(entry.last_accessed() >= entry.created_at);
    }

    #[test]
    fn tampered_checksum_fails_and_stays_unverified() {
        let mut entry = entry("abc");
        entry.checksum = "0000".to_string();
        assert!(matches!(entry.verify("abc"), Err(CacheError::Corruption { .. })));
        assert!(!entry.is_verified());
    }

    #[test]
    fn wrong_key_fails_even_after_verification() {
        let entry = entry("abc");
        entry.verify("abc").unwrap();
        assert!(entry.verify("xyz").is_err());
    }
}
