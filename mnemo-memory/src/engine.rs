//! MemoryEngine: save policy and ranked recall over an `IMemoryStore`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use mnemo_core::constants::MEMORY_OVERFETCH_FACTOR;
use mnemo_core::errors::{MnemoError, MnemoResult};
use mnemo_core::models::{Fact, MemoryType, NewMemory, RankedMemory, Role, SavedMemory};
use mnemo_core::traits::{IEmbeddingProvider, IMemoryStore, MemoryQuery};

use crate::ranking::{rank, ScorerWeights};

/// Arguments for [`MemoryEngine::save`].
#[derive(Debug, Clone, Copy)]
pub struct SaveMemory<'a> {
    pub user_id: &'a str,
    pub role: Role,
    pub content: &'a str,
    pub memory_key: Option<&'a str>,
    pub memory_type: MemoryType,
    pub conversation_id: Option<&'a str>,
}

impl<'a> SaveMemory<'a> {
    pub fn chat(user_id: &'a str, role: Role, content: &'a str) -> Self {
        Self {
            user_id,
            role,
            content,
            memory_key: None,
            memory_type: MemoryType::Chat,
            conversation_id: None,
        }
    }

    pub fn fact(user_id: &'a str, key: &'a str, value: &'a str) -> Self {
        Self {
            user_id,
            role: Role::User,
            content: value,
            memory_key: Some(key),
            memory_type: MemoryType::Fact,
            conversation_id: None,
        }
    }

    pub fn in_conversation(mut self, conversation_id: Option<&'a str>) -> Self {
        self.conversation_id = conversation_id;
        self
    }
}

pub struct MemoryEngine {
    store: Arc<dyn IMemoryStore>,
    embedder: Arc<dyn IEmbeddingProvider>,
    weights: ScorerWeights,
}

impl MemoryEngine {
    pub fn new(store: Arc<dyn IMemoryStore>, embedder: Arc<dyn IEmbeddingProvider>) -> Self {
        Self {
            store,
            embedder,
            weights: ScorerWeights::default(),
        }
    }

    pub fn store(&self) -> &Arc<dyn IMemoryStore> {
        &self.store
    }

    /// Persist one memory.
    ///
    /// A fact with a non-empty key upserts on `(user_id, key)`; the embedded
    /// text is `"key: value"` so recall matches on the attribute name too.
    /// Anything else is appended as an unkeyed chat row.
    pub fn save(&self, request: SaveMemory<'_>) -> MnemoResult<SavedMemory> {
        if request.user_id.trim().is_empty() {
            return Err(MnemoError::validation("user_id", "must not be empty"));
        }

        let key = request
            .memory_key
            .map(str::trim)
            .filter(|k| !k.is_empty() && request.memory_type == MemoryType::Fact);

        let (memory_type, embed_text) = match key {
            Some(k) => (MemoryType::Fact, format!("{k}: {}", request.content)),
            None => (MemoryType::Chat, request.content.to_string()),
        };
        let embedding = self.embedder.embed(&embed_text)?;

        let saved = self.store.save(&NewMemory {
            user_id: request.user_id.to_string(),
            role: request.role,
            content: request.content.to_string(),
            embedding,
            memory_key: key.map(str::to_string),
            memory_type,
            conversation_id: request.conversation_id.map(str::to_string),
        })?;
        debug!(
            user_id = request.user_id,
            memory_type = memory_type.as_str(),
            id = saved.id,
            "memory saved"
        );
        Ok(saved)
    }

    /// Contents of the top `limit` memories by composite score.
    pub fn retrieve(
        &self,
        user_id: &str,
        query_embedding: &[f32],
        limit: usize,
        role_filter: Option<Role>,
        conversation_id: Option<&str>,
    ) -> MnemoResult<Vec<String>> {
        Ok(self
            .retrieve_ranked(user_id, query_embedding, limit, role_filter, conversation_id, Utc::now())?
            .into_iter()
            .map(|r| r.candidate.content)
            .collect())
    }

    /// Over-fetch by distance, re-rank at `now`, keep the top `limit`.
    pub fn retrieve_ranked(
        &self,
        user_id: &str,
        query_embedding: &[f32],
        limit: usize,
        role_filter: Option<Role>,
        conversation_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> MnemoResult<Vec<RankedMemory>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let fetch = limit.saturating_mul(MEMORY_OVERFETCH_FACTOR).max(limit);
        let candidates = self.store.nearest(&MemoryQuery {
            user_id,
            embedding: query_embedding,
            limit: fetch,
            role: role_filter,
            conversation_id,
        })?;
        let fetched = candidates.len();

        let mut ranked = rank(candidates, now, &self.weights);
        ranked.truncate(limit);
        debug!(user_id, fetched, returned = ranked.len(), "memory recall ranked");
        Ok(ranked)
    }

    /// Current value of every keyed fact, newest first.
    pub fn latest_facts_by_key(&self, user_id: &str) -> MnemoResult<Vec<Fact>> {
        self.store.latest_facts(user_id)
    }
}
