//! Wiring from config to a ready ChatEngine.

use std::sync::Arc;

use tracing::info;

use mnemo_completion::CompletionEngine;
use mnemo_core::config::MnemoConfig;
use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{ChatRequest, ChatResponse, SearchRequest, SearchResponse};
use mnemo_core::tracing_setup::init_tracing_from_config;
use mnemo_embeddings::EmbeddingEngine;
use mnemo_storage::{StorageCounts, StorageEngine};

use crate::engine::{ChatEngine, ChatPorts};

/// Storage, providers and the chat engine built from one config.
pub struct MnemoRuntime {
    config: MnemoConfig,
    storage: Arc<StorageEngine>,
    chat: ChatEngine,
}

impl MnemoRuntime {
    /// Build every subsystem. Tracing is installed first.
    pub fn from_config(config: MnemoConfig) -> MnemoResult<Self> {
        init_tracing_from_config(&config.observability);

        let storage = Arc::new(StorageEngine::open_with_config(&config.storage)?);
        let embedder = Arc::new(EmbeddingEngine::from_config(&config.embedding, &config.retry)?);
        let completion = Arc::new(CompletionEngine::from_config(&config.completion, &config.retry)?);
        info!(
            embedding = embedder.provider_name(),
            db = config.storage.db_path.as_deref().unwrap_or(":memory:"),
            "mnemo runtime ready"
        );

        Self::with_ports(
            config,
            Arc::clone(&storage),
            ChatPorts {
                memory_store: storage.clone(),
                retrieval_store: storage,
                embedder,
                completion,
            },
        )
    }

    /// Build around an existing store and caller-supplied ports.
    pub fn with_ports(config: MnemoConfig, storage: Arc<StorageEngine>, ports: ChatPorts) -> MnemoResult<Self> {
        let chat = ChatEngine::new(&config, ports)?;
        Ok(Self {
            config,
            storage,
            chat,
        })
    }

    pub fn config(&self) -> &MnemoConfig {
        &self.config
    }

    pub fn storage(&self) -> &Arc<StorageEngine> {
        &self.storage
    }

    pub fn chat(&self) -> &ChatEngine {
        &self.chat
    }

    pub fn handle_chat(&self, request: &ChatRequest) -> MnemoResult<ChatResponse> {
        self.chat.handle_chat(request)
    }

    pub fn search_documents_by_text(&self, request: &SearchRequest) -> MnemoResult<SearchResponse> {
        self.chat.search_documents_by_text(request)
    }

    pub fn counts(&self) -> MnemoResult<StorageCounts> {
        self.storage.counts()
    }
}
