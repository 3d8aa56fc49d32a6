use crate::errors::MnemoResult;
use crate::models::{Fact, MemoryCandidate, NewMemory, Role, SavedMemory};

/// Distance-ordered memory lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryQuery<'a> {
    pub user_id: &'a str,
    pub embedding: &'a [f32],
    pub limit: usize,
    pub role: Option<Role>,
    /// Restrict chat rows to one conversation. Ignored when unsupported.
    pub conversation_id: Option<&'a str>,
}

/// Persistence and raw retrieval of user memories.
pub trait IMemoryStore: Send + Sync {
    /// Upsert a keyed fact on `(user_id, memory_key)`, or append a chat row.
    fn save(&self, memory: &NewMemory) -> MnemoResult<SavedMemory>;

    /// Up to `limit` memories of the user ordered by ascending raw distance.
    fn nearest(&self, query: &MemoryQuery<'_>) -> MnemoResult<Vec<MemoryCandidate>>;

    /// Most recently written row per distinct memory key.
    fn latest_facts(&self, user_id: &str) -> MnemoResult<Vec<Fact>>;

    /// Whether the optional conversation scoping column exists.
    fn supports_conversation_scope(&self) -> MnemoResult<bool>;
}
