use async_trait::async_trait;

use crate::errors::CareerResult;
use crate::models::SearchHit;

/// Nearest-neighbor search over pre-computed chunk embeddings.
#[async_trait]
pub trait IDocumentIndex: Send + Sync {
    /// Up to `k` hits, best first.
    async fn search(&self, query_embedding: &[f32], k: usize) -> CareerResult<Vec<SearchHit>>;

    fn name(&self) -> &str;
}
