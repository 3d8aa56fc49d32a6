use serde::{Deserialize, Serialize};

use super::defaults;

/// RAG retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of nearest chunks fetched per query.
    pub top_k: usize,
    /// Maximum cosine distance for a chunk to count as relevant.
    pub distance_threshold: f64,
    /// Default limit for document search.
    pub search_limit: usize,
    /// Upper bound accepted for document search limits.
    pub max_search_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            distance_threshold: defaults::DEFAULT_DISTANCE_THRESHOLD,
            search_limit: defaults::DEFAULT_SEARCH_LIMIT,
            max_search_limit: defaults::DEFAULT_MAX_SEARCH_LIMIT,
        }
    }
}
