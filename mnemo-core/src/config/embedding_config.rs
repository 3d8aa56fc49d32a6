use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding port configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "api" or "tfidf".
    pub provider: String,
    /// Embeddings endpoint (OpenAI-compatible).
    pub endpoint: String,
    /// Model name sent to the endpoint.
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// L1 in-memory cache max entries.
    pub l1_cache_size: u64,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
