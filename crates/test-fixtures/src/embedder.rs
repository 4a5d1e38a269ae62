//! Deterministic hashing embedder.
//!
//! Term frequencies hashed into fixed buckets with FNV-1a, L2-normalized.
//! Good enough for lexical nearest-neighbor tests.

use std::collections::HashMap;

use async_trait::async_trait;

use career_core::constants::DOCUMENT_ADAPTER;
use career_core::errors::CareerResult;
use career_core::traits::IQueryEmbedder;

use crate::faults::{CallCounter, FaultSwitch};

pub const DEFAULT_DIMENSIONS: usize = 256;

#[derive(Debug)]
pub struct HashingEmbedder {
    dimensions: usize,
    calls: CallCounter,
    fault: FaultSwitch,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            calls: CallCounter::default(),
            fault: FaultSwitch::default(),
        }
    }

    pub fn calls(&self) -> &CallCounter {
        &self.calls
    }

    pub fn fault(&self) -> &FaultSwitch {
        &self.fault
    }

    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Embed without counting or faults. Used to build indexes.
    pub fn vector(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }
        for (term, count) in tf {
            vec[Self::hash_term(term, self.dimensions)] += count;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSIONS)
    }
}

#[async_trait]
impl IQueryEmbedder for HashingEmbedder {
    async fn embed(&self, text: &str) -> CareerResult<Vec<f32>> {
        self.calls.record("embed");
        self.fault.apply(DOCUMENT_ADAPTER).await?;
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-embedder"
    }
}
