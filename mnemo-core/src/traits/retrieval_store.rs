use crate::errors::MnemoResult;
use crate::models::{RetrievedChunk, SearchHit};

/// Nearest-chunk queries over the ingested corpus.
pub trait IRetrievalStore: Send + Sync {
    /// The `top_k` nearest chunks ordered by ascending raw distance.
    fn nearest_chunks(&self, embedding: &[f32], top_k: usize) -> MnemoResult<Vec<RetrievedChunk>>;

    /// Up to `limit` chunks ordered by descending normalised similarity.
    fn similar_chunks(&self, embedding: &[f32], limit: usize) -> MnemoResult<Vec<SearchHit>>;
}
