use serde::{Deserialize, Serialize};

use super::memory::Role;
use super::retrieval::RetrievalMeta;

/// One caller-supplied history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: String,
    pub question: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    /// Optional conversation scope, honoured when the store supports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    pub fn new(user_id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            question: question.into(),
            history: Vec::new(),
            conversation_id: None,
        }
    }

    pub fn with_history(mut self, history: Vec<ChatTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn with_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryMeta {
    pub similar_top_k: usize,
    pub facts_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub rag: RetrievalMeta,
    pub memory: MemoryMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub answer: String,
    pub history: Vec<ChatTurn>,
    pub context_used: Vec<String>,
    pub memory_used: bool,
    pub meta: ResponseMeta,
}
