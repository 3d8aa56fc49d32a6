//! Provider registry.
//!
//! `api` talks to an OpenAI-compatible embeddings endpoint. `tfidf` is the
//! offline hashing provider, also used when the API key is missing.

pub mod api_provider;
pub mod tfidf_fallback;

pub use api_provider::ApiProvider;
pub use tfidf_fallback::TfIdfFallback;

use mnemo_core::config::EmbeddingConfig;
use mnemo_core::errors::MnemoResult;
use mnemo_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Create the configured provider, boxed.
pub fn create_provider(config: &EmbeddingConfig) -> MnemoResult<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "api" => match std::env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => {
                info!(provider = "api", model = %config.model, "embedding provider configured");
                Ok(Box::new(ApiProvider::from_config(config, key)?))
            }
            _ => {
                warn!(
                    env = %config.api_key_env,
                    "embedding API key not set, falling back to TF-IDF"
                );
                Ok(Box::new(TfIdfFallback::new(config.dimensions)))
            }
        },
        _ => {
            info!(provider = "tfidf", dims = config.dimensions, "embedding provider configured");
            Ok(Box::new(TfIdfFallback::new(config.dimensions)))
        }
    }
}
