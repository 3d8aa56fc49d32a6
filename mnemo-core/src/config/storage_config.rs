use serde::{Deserialize, Serialize};

use super::defaults;

/// Storage subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database. `None` opens an in-memory database.
    pub db_path: Option<String>,
    /// Number of read connections (file-backed mode only).
    pub read_pool_size: usize,
    /// Create the optional `conversation_id` column on `user_memories`.
    pub conversation_scoping: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
            conversation_scoping: defaults::DEFAULT_CONVERSATION_SCOPING,
        }
    }
}
