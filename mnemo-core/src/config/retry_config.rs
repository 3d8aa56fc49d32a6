use serde::{Deserialize, Serialize};

use super::defaults;

/// Retry wrapper configuration for embedding/completion calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Delay before retry N is `delays_ms[N - 1]`; the last entry repeats.
    pub delays_ms: Vec<u64>,
    /// Upstream HTTP statuses that are retried.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::DEFAULT_MAX_ATTEMPTS,
            delays_ms: defaults::DEFAULT_RETRY_DELAYS_MS.to_vec(),
            retryable_statuses: defaults::DEFAULT_RETRYABLE_STATUSES.to_vec(),
        }
    }
}
