//! Configuration with layered resolution: compiled defaults, TOML file,
//! then `MNEMO_*` environment variables.

pub mod completion_config;
pub mod defaults;
pub mod embedding_config;
pub mod memory_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod retry_config;
pub mod storage_config;
pub mod vocabulary_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use completion_config::CompletionConfig;
pub use embedding_config::EmbeddingConfig;
pub use memory_config::MemoryConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use retry_config::RetryConfig;
pub use storage_config::StorageConfig;
pub use vocabulary_config::VocabularyConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemoConfig {
    pub storage: StorageConfig,
    pub embedding: EmbeddingConfig,
    pub completion: CompletionConfig,
    pub retrieval: RetrievalConfig,
    pub memory: MemoryConfig,
    pub retry: RetryConfig,
    pub vocabulary: VocabularyConfig,
    pub observability: ObservabilityConfig,
}

impl MnemoConfig {
    /// Load configuration.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`MNEMO_*`)
    /// 2. TOML file at `path`, when given
    /// 3. Compiled defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFailed {
                    path: p.display().to_string(),
                    message: e.to_string(),
                })?;
                toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                    path: p.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MNEMO_*` overrides through the given lookup.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("MNEMO_DB_PATH") {
            self.storage.db_path = Some(v);
        }
        if let Some(v) = lookup("MNEMO_EMBEDDING_PROVIDER") {
            self.embedding.provider = v;
        }
        if let Some(v) = lookup("MNEMO_EMBEDDING_ENDPOINT") {
            self.embedding.endpoint = v;
        }
        if let Some(v) = lookup("MNEMO_EMBEDDING_MODEL") {
            self.embedding.model = v;
        }
        if let Some(v) = lookup("MNEMO_COMPLETION_ENDPOINT") {
            self.completion.endpoint = v;
        }
        if let Some(v) = lookup("MNEMO_COMPLETION_MODEL") {
            self.completion.model = v;
        }
        if let Some(v) = lookup("MNEMO_TOP_K").and_then(|s| s.parse().ok()) {
            self.retrieval.top_k = v;
        }
        if let Some(v) = lookup("MNEMO_DISTANCE_THRESHOLD").and_then(|s| s.parse().ok()) {
            self.retrieval.distance_threshold = v;
        }
        if let Some(v) = lookup("MNEMO_LOG") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.retrieval.distance_threshold) {
            return Err(invalid("retrieval.distance_threshold", "must be between 0.0 and 2.0"));
        }
        if self.retrieval.top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be at least 1"));
        }
        if self.retrieval.max_search_limit == 0 {
            return Err(invalid("retrieval.max_search_limit", "must be at least 1"));
        }
        if self.retry.max_attempts == 0 {
            return Err(invalid("retry.max_attempts", "must be at least 1"));
        }
        if self.retry.delays_ms.is_empty() {
            return Err(invalid("retry.delays_ms", "must contain at least one delay"));
        }
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be at least 1"));
        }
        match self.embedding.provider.as_str() {
            "api" | "tfidf" => Ok(()),
            other => Err(invalid(
                "embedding.provider",
                &format!("unknown provider '{other}', expected 'api' or 'tfidf'"),
            )),
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
