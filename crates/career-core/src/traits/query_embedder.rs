use async_trait::async_trait;

use crate::errors::CareerResult;

/// Turns query text into the vector space of the document index.
/// A failure here counts against the document adapter class.
#[async_trait]
pub trait IQueryEmbedder: Send + Sync {
    async fn embed(&self, text: &str) -> CareerResult<Vec<f32>>;

    fn dimensions(&self) -> usize;

    fn name(&self) -> &str;
}
