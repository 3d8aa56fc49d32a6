use serde::{Deserialize, Serialize};

use super::chunk::RetrievedChunk;

/// Parameters and outcome size of one RAG lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalMeta {
    pub top_k: usize,
    pub distance_threshold: f64,
    pub chunks_returned: usize,
}

/// Per-query RAG output. Not persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalResult {
    /// The `top_k` nearest chunks, ascending distance.
    pub raw_chunks: Vec<RetrievedChunk>,
    /// `raw_chunks` within the distance threshold.
    pub filtered_chunks: Vec<RetrievedChunk>,
    /// `filtered_chunks`, or `raw_chunks` when filtering removed everything.
    pub final_chunks: Vec<RetrievedChunk>,
    pub meta: RetrievalMeta,
}

impl RetrievalResult {
    /// Whether the threshold removed every candidate and the raw set was used.
    pub fn used_fallback(&self) -> bool {
        self.filtered_chunks.is_empty() && !self.raw_chunks.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.final_chunks.is_empty()
    }
}
