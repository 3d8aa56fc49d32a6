//! RetrievalEngine over an `IRetrievalStore`.

use std::sync::Arc;

use tracing::debug;

use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{RetrievalResult, SearchHit};
use mnemo_core::traits::IRetrievalStore;

use crate::filter::apply_threshold;

pub struct RetrievalEngine {
    store: Arc<dyn IRetrievalStore>,
}

impl RetrievalEngine {
    pub fn new(store: Arc<dyn IRetrievalStore>) -> Self {
        Self { store }
    }

    /// Fetch the `top_k` nearest chunks and apply the threshold with fallback.
    pub fn retrieve(
        &self,
        query_embedding: &[f32],
        top_k: usize,
        distance_threshold: f64,
    ) -> MnemoResult<RetrievalResult> {
        let raw = self.store.nearest_chunks(query_embedding, top_k)?;
        let result = apply_threshold(raw, top_k, distance_threshold);
        debug!(
            top_k,
            distance_threshold,
            raw = result.raw_chunks.len(),
            filtered = result.filtered_chunks.len(),
            fallback = result.used_fallback(),
            "rag retrieval"
        );
        Ok(result)
    }

    /// Similarity-ranked chunks, no threshold and no fallback.
    pub fn semantic_search(&self, query_embedding: &[f32], limit: usize) -> MnemoResult<Vec<SearchHit>> {
        self.store.similar_chunks(query_embedding, limit)
    }
}
