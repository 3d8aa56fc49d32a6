//! ChatEngine: the request state machine.
//!
//! `handle_chat` runs the pre-classification stages, classifies, runs the
//! post-classification stages, then dispatches to an intent pipeline. The
//! chosen branch returns a [`Reply`]; [`ChatEngine::finish`] persists it and
//! builds the response.

use std::sync::Arc;

use tracing::{debug, info};

use mnemo_classifier::Classifier;
use mnemo_core::config::MnemoConfig;
use mnemo_core::errors::{MnemoError, MnemoResult};
use mnemo_core::models::{
    ChatRequest, ChatResponse, ChatTurn, MemoryMeta, ResponseMeta, RetrievalMeta, RetrievalResult,
    Role, SearchRequest, SearchResponse,
};
use mnemo_core::traits::{ICompletionProvider, IEmbeddingProvider, IMemoryStore, IRetrievalStore};
use mnemo_memory::engine::SaveMemory;
use mnemo_memory::MemoryEngine;
use mnemo_retrieval::RetrievalEngine;

use crate::pipelines;
use crate::reply::{Persist, Reply};
use crate::stages::{first_match, Turn, POST_CLASSIFICATION, PRE_CLASSIFICATION};

/// Numeric knobs read from config once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatSettings {
    pub top_k: usize,
    pub distance_threshold: f64,
    pub similar_top_k: usize,
    pub search_limit: usize,
    pub max_search_limit: usize,
}

impl ChatSettings {
    pub fn from_config(config: &MnemoConfig) -> Self {
        Self {
            top_k: config.retrieval.top_k,
            distance_threshold: config.retrieval.distance_threshold,
            similar_top_k: config.memory.similar_top_k,
            search_limit: config.retrieval.search_limit,
            max_search_limit: config.retrieval.max_search_limit,
        }
    }
}

/// The ports the engine is wired to.
#[derive(Clone)]
pub struct ChatPorts {
    pub memory_store: Arc<dyn IMemoryStore>,
    pub retrieval_store: Arc<dyn IRetrievalStore>,
    pub embedder: Arc<dyn IEmbeddingProvider>,
    pub completion: Arc<dyn ICompletionProvider>,
}

pub struct ChatEngine {
    classifier: Classifier,
    memory: MemoryEngine,
    retrieval: RetrievalEngine,
    embedder: Arc<dyn IEmbeddingProvider>,
    completion: Arc<dyn ICompletionProvider>,
    settings: ChatSettings,
}

impl ChatEngine {
    pub fn new(config: &MnemoConfig, ports: ChatPorts) -> MnemoResult<Self> {
        Ok(Self {
            classifier: Classifier::new(&config.vocabulary, Arc::clone(&ports.completion))?,
            memory: MemoryEngine::new(ports.memory_store, Arc::clone(&ports.embedder)),
            retrieval: RetrievalEngine::new(ports.retrieval_store),
            embedder: ports.embedder,
            completion: ports.completion,
            settings: ChatSettings::from_config(config),
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn memory(&self) -> &MemoryEngine {
        &self.memory
    }

    pub fn completion(&self) -> &dyn ICompletionProvider {
        self.completion.as_ref()
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    pub fn embed(&self, text: &str) -> MnemoResult<Vec<f32>> {
        self.embedder.embed(text)
    }

    /// RAG lookup with the configured `top_k` and threshold.
    pub fn retrieve_with_embedding(&self, embedding: &[f32]) -> MnemoResult<RetrievalResult> {
        self.retrieval
            .retrieve(embedding, self.settings.top_k, self.settings.distance_threshold)
    }

    pub fn retrieve_documents(&self, question: &str) -> MnemoResult<RetrievalResult> {
        let embedding = self.embed(question)?;
        self.retrieve_with_embedding(&embedding)
    }

    /// Answer one chat request.
    ///
    /// Embedding, completion and store failures propagate unchanged; every
    /// other outcome is a templated or generated answer.
    pub fn handle_chat(&self, request: &ChatRequest) -> MnemoResult<ChatResponse> {
        if request.user_id.trim().is_empty() {
            return Err(MnemoError::validation("user_id", "must not be empty"));
        }
        let question = request.question.trim();
        let turn = Turn::new(request, question);

        if let Some(stage) = first_match(PRE_CLASSIFICATION, self, &turn) {
            debug!(stage = stage.name, "stage matched");
            let reply = (stage.handle)(self, &turn)?;
            return self.finish(request, question, stage.name, reply);
        }

        let classification = self.classifier.classify(question)?;
        let turn = turn.classified(&classification);

        if let Some(stage) = first_match(POST_CLASSIFICATION, self, &turn) {
            debug!(stage = stage.name, "stage matched");
            let reply = (stage.handle)(self, &turn)?;
            return self.finish(request, question, stage.name, reply);
        }

        let reply = pipelines::dispatch(self, &turn, classification.intent)?;
        self.finish(request, question, classification.intent.as_str(), reply)
    }

    /// Persist the exchange, extend the history and attach metadata.
    fn finish(
        &self,
        request: &ChatRequest,
        question: &str,
        branch: &str,
        reply: Reply,
    ) -> MnemoResult<ChatResponse> {
        let user_id = request.user_id.as_str();
        let conversation_id = request.conversation_id.as_deref();

        if reply.persist == Persist::QuestionAndAnswer {
            self.memory
                .save(SaveMemory::chat(user_id, Role::User, question).in_conversation(conversation_id))?;
        }
        if reply.persist != Persist::Nothing {
            self.memory.save(
                SaveMemory::chat(user_id, Role::Assistant, &reply.answer)
                    .in_conversation(conversation_id),
            )?;
        }

        let mut history = request.history.clone();
        if reply.persist != Persist::Nothing {
            history.push(ChatTurn::user(question));
            history.push(ChatTurn::assistant(reply.answer.clone()));
        }

        let facts_count = self.memory.latest_facts_by_key(user_id)?.len();
        info!(
            user_id,
            branch,
            memory_used = reply.memory_used,
            chunks = reply.chunks_returned,
            "chat answered"
        );

        Ok(ChatResponse {
            answer: reply.answer,
            history,
            context_used: reply.context_used,
            memory_used: reply.memory_used,
            meta: ResponseMeta {
                rag: RetrievalMeta {
                    top_k: self.settings.top_k,
                    distance_threshold: self.settings.distance_threshold,
                    chunks_returned: reply.chunks_returned,
                },
                memory: MemoryMeta {
                    similar_top_k: self.settings.similar_top_k,
                    facts_count,
                },
            },
        })
    }

    /// Similarity-ranked chunks for a free-text query.
    ///
    /// The limit defaults to the configured search limit and is clamped to
    /// `1..=max_search_limit`.
    pub fn search_documents_by_text(&self, request: &SearchRequest) -> MnemoResult<SearchResponse> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(MnemoError::validation("query", "must not be empty"));
        }
        let limit = request
            .limit
            .unwrap_or(self.settings.search_limit)
            .clamp(1, self.settings.max_search_limit.max(1));

        let embedding = self.embed(query)?;
        let results = self.retrieval.semantic_search(&embedding, limit)?;
        debug!(limit, results = results.len(), "document search");
        Ok(SearchResponse {
            query: request.query.clone(),
            results,
        })
    }
}
