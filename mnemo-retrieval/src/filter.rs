use mnemo_core::models::{RetrievalMeta, RetrievalResult, RetrievedChunk};

/// Keep chunks with `distance <= threshold`. When that removes everything,
/// the final set falls back to the unfiltered input.
pub fn apply_threshold(
    raw_chunks: Vec<RetrievedChunk>,
    top_k: usize,
    distance_threshold: f64,
) -> RetrievalResult {
    let filtered_chunks: Vec<RetrievedChunk> = raw_chunks
        .iter()
        .filter(|c| c.distance <= distance_threshold)
        .cloned()
        .collect();
    let final_chunks = if filtered_chunks.is_empty() {
        raw_chunks.clone()
    } else {
        filtered_chunks.clone()
    };

    RetrievalResult {
        meta: RetrievalMeta {
            top_k,
            distance_threshold,
            chunks_returned: final_chunks.len(),
        },
        raw_chunks,
        filtered_chunks,
        final_chunks,
    }
}
