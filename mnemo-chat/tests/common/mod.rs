//! Shared wiring for chat integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use mnemo_chat::{ChatEngine, ChatPorts};
use mnemo_core::config::MnemoConfig;
use mnemo_core::models::{MemoryType, NewChunk};
use mnemo_core::traits::{ICompletionProvider, IEmbeddingProvider};
use mnemo_memory::engine::SaveMemory;
use mnemo_storage::StorageEngine;
use test_fixtures::{HashEmbedder, ScriptedCompletion};

pub struct Harness {
    pub storage: Arc<StorageEngine>,
    pub embedder: Arc<HashEmbedder>,
    pub completion: Arc<ScriptedCompletion>,
    pub engine: ChatEngine,
}

impl Harness {
    pub fn new(completion: ScriptedCompletion) -> Self {
        Self::with_config(&MnemoConfig::default(), completion)
    }

    pub fn with_config(config: &MnemoConfig, completion: ScriptedCompletion) -> Self {
        let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
        let embedder = Arc::new(HashEmbedder::default());
        let completion = Arc::new(completion);
        let engine = build_engine(config, Arc::clone(&storage), embedder.clone(), completion.clone());
        Self {
            storage,
            embedder,
            completion,
            engine,
        }
    }

    pub fn seed_fact(&self, user_id: &str, key: &str, value: &str) {
        self.engine
            .memory()
            .save(SaveMemory::fact(user_id, key, value))
            .unwrap();
    }

    pub fn seed_chunks(&self, contents: &[&str]) {
        let doc = self
            .storage
            .upsert_document("Employee Handbook", "docs/handbook.md")
            .unwrap();
        let chunks: Vec<NewChunk> = contents
            .iter()
            .enumerate()
            .map(|(i, c)| NewChunk {
                chunk_index: i as i64,
                content: (*c).to_string(),
                embedding: self.embedder.embed(c).unwrap(),
            })
            .collect();
        self.storage.insert_chunks(doc.id, &chunks).unwrap();
    }

    pub fn chat_rows(&self, user_id: &str) -> usize {
        self.storage
            .memory_count(user_id, Some(MemoryType::Chat))
            .unwrap()
    }

    pub fn fact_rows(&self, user_id: &str) -> usize {
        self.storage
            .memory_count(user_id, Some(MemoryType::Fact))
            .unwrap()
    }
}

pub fn build_engine(
    config: &MnemoConfig,
    storage: Arc<StorageEngine>,
    embedder: Arc<dyn IEmbeddingProvider>,
    completion: Arc<dyn ICompletionProvider>,
) -> ChatEngine {
    ChatEngine::new(
        config,
        ChatPorts {
            memory_store: storage.clone(),
            retrieval_store: storage,
            embedder,
            completion,
        },
    )
    .unwrap()
}

pub const HANDBOOK: [&str; 3] = [
    "Employees may take one fifteen minute coffee break every two hours.",
    "Remote work requires manager approval one week in advance.",
    "Annual leave requests must be submitted through the HR portal.",
];
