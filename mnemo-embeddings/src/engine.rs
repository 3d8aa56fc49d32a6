//! EmbeddingEngine: the entry point for mnemo-embeddings.
//!
//! Wraps one provider with the bounded retry policy and the L1 cache, and
//! implements `IEmbeddingProvider` so it can stand in for the provider.

use mnemo_core::config::{EmbeddingConfig, RetryConfig};
use mnemo_core::errors::{EmbeddingError, MnemoResult};
use mnemo_core::retry::RetryPolicy;
use mnemo_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::{content_key, L1MemoryCache};
use crate::providers;

pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: L1MemoryCache,
    retry: RetryPolicy,
}

impl EmbeddingEngine {
    pub fn new(provider: Box<dyn IEmbeddingProvider>, retry: RetryPolicy, cache_size: u64) -> Self {
        info!(
            provider = provider.name(),
            dims = provider.dimensions(),
            cache_size,
            "EmbeddingEngine initialized"
        );
        Self {
            provider,
            cache: L1MemoryCache::new(cache_size),
            retry,
        }
    }

    pub fn from_config(config: &EmbeddingConfig, retry: &RetryConfig) -> MnemoResult<Self> {
        let provider = providers::create_provider(config)?;
        Ok(Self::new(
            provider,
            RetryPolicy::from_config(retry),
            config.l1_cache_size,
        ))
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn cache(&self) -> &L1MemoryCache {
        &self.cache
    }

    fn check_dimensions(&self, embedding: &[f32]) -> MnemoResult<()> {
        let expected = self.provider.dimensions();
        if embedding.len() != expected {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: embedding.len(),
            }
            .into());
        }
        Ok(())
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> MnemoResult<Vec<f32>> {
        let key = content_key(self.provider.name(), text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(provider = self.provider.name(), "embedding cache hit");
            return Ok(hit);
        }

        let embedding = self.retry.run("embed", |_| self.provider.embed(text))?;
        self.check_dimensions(&embedding)?;
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    /// Cached entries are served directly. The misses go to the provider in
    /// one batch call, and output order matches `texts`.
    fn embed_batch(&self, texts: &[String]) -> MnemoResult<Vec<Vec<f32>>> {
        let keys: Vec<String> = texts
            .iter()
            .map(|t| content_key(self.provider.name(), t))
            .collect();
        let mut out: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();

        let missing: Vec<usize> = (0..texts.len()).filter(|i| out[*i].is_none()).collect();
        if !missing.is_empty() {
            let batch: Vec<String> = missing.iter().map(|i| texts[*i].clone()).collect();
            let embedded = self
                .retry
                .run("embed_batch", |_| self.provider.embed_batch(&batch))?;
            if embedded.len() != batch.len() {
                return Err(EmbeddingError::InvalidResponse {
                    reason: format!("expected {} embeddings, got {}", batch.len(), embedded.len()),
                }
                .into());
            }
            for (idx, embedding) in missing.into_iter().zip(embedded) {
                self.check_dimensions(&embedding)?;
                self.cache.insert(keys[idx].clone(), embedding.clone());
                out[idx] = Some(embedding);
            }
        }

        out.into_iter()
            .map(|e| {
                e.ok_or_else(|| {
                    EmbeddingError::InvalidResponse {
                        reason: "missing embedding in batch".to_string(),
                    }
                    .into()
                })
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    fn name(&self) -> &str {
        "mnemo-embedding-engine"
    }
}
