use serde::{Deserialize, Serialize};

use super::defaults;

/// Completion port configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Chat completions endpoint (OpenAI-compatible).
    pub endpoint: String,
    /// Model name sent to the endpoint.
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_COMPLETION_ENDPOINT.to_string(),
            model: defaults::DEFAULT_COMPLETION_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            temperature: defaults::DEFAULT_COMPLETION_TEMPERATURE,
            timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
