use serde::{Deserialize, Serialize};

use super::defaults;

/// Memory subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Number of similar chat memories recalled per question.
    pub similar_top_k: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            similar_top_k: defaults::DEFAULT_SIMILAR_TOP_K,
        }
    }
}
