//! In-memory document index with brute-force cosine search.

use std::cmp::Ordering;
use std::sync::RwLock;

use async_trait::async_trait;

use career_core::constants::DOCUMENT_ADAPTER;
use career_core::errors::CareerResult;
use career_core::models::{DocumentChunk, SearchHit};
use career_core::traits::IDocumentIndex;

use crate::embedder::HashingEmbedder;
use crate::faults::{CallCounter, FaultSwitch};
use crate::seed::SeedCorpus;

#[derive(Debug, Default)]
pub struct InMemoryDocumentIndex {
    chunks: RwLock<Vec<DocumentChunk>>,
    calls: CallCounter,
    fault: FaultSwitch,
}

impl InMemoryDocumentIndex {
    pub fn new(chunks: Vec<DocumentChunk>) -> Self {
        Self {
            chunks: RwLock::new(chunks),
            ..Default::default()
        }
    }

    /// Embed every chunk of `corpus` with `embedder`.
    pub fn from_corpus(corpus: SeedCorpus, embedder: &HashingEmbedder) -> Self {
        let chunks = corpus
            .chunks
            .into_iter()
            .map(|c| {
                let embedding = embedder.vector(&c.text);
                DocumentChunk::new(c.id, c.text, embedding, c.source)
            })
            .collect();
        Self::new(chunks)
    }

    /// The corpus from `documents/corpus.json`.
    pub fn seeded(embedder: &HashingEmbedder) -> Self {
        Self::from_corpus(crate::seed_corpus(), embedder)
    }

    pub fn calls(&self) -> &CallCounter {
        &self.calls
    }

    pub fn fault(&self) -> &FaultSwitch {
        &self.fault
    }

    pub fn len(&self) -> usize {
        self.chunks.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace or insert a chunk, as a corpus reprocess would.
    pub fn upsert(&self, chunk: DocumentChunk) {
        let mut chunks = self.chunks.write().unwrap();
        match chunks.iter_mut().find(|c| c.id == chunk.id) {
            Some(existing) => *existing = chunk,
            None => chunks.push(chunk),
        }
    }

    pub fn remove(&self, id: &str) {
        self.chunks.write().unwrap().retain(|c| c.id != id);
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na <= f32::EPSILON || nb <= f32::EPSILON {
        return 0.0;
    }
    (dot / (na * nb)) as f64
}

#[async_trait]
impl IDocumentIndex for InMemoryDocumentIndex {
    async fn search(&self, query_embedding: &[f32], k: usize) -> CareerResult<Vec<SearchHit>> {
        self.calls.record("search");
        self.fault.apply(DOCUMENT_ADAPTER).await?;

        let chunks = self.chunks.read().unwrap();
        let mut hits: Vec<SearchHit> = chunks
            .iter()
            .map(|c| SearchHit {
                chunk_id: c.id.clone(),
                score: cosine(query_embedding, &c.embedding),
                text: c.text.clone(),
                source: c.source.clone(),
            })
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.chunk_id.cmp(&b.chunk_id))
        });
        hits.truncate(k);
        Ok(hits)
    }

    fn name(&self) -> &str {
        "in-memory-documents"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sql_query_finds_sql_skill_document() {
        let embedder = HashingEmbedder::default();
        let index = InMemoryDocumentIndex::seeded(&embedder);
        let hits = index.search(&embedder.vector("SQL"), 3).await.unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].source.source, "skills/sql.md");
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn upsert_replaces_by_id() {
        let embedder = HashingEmbedder::default();
        let index = InMemoryDocumentIndex::seeded(&embedder);
        let before = index.len();
        let mut chunk = {
            let chunks = index.chunks.read().unwrap();
            chunks[0].clone()
        };
        chunk.text = "rewritten".to_string();
        index.upsert(chunk);
        assert_eq!(index.len(), before);
    }
}
