//! Message assembly for answer completions.

use mnemo_core::constants::DONT_KNOW_LITERAL;
use mnemo_core::models::ChatTurn;
use mnemo_core::traits::CompletionRequest;
use serde::Serialize;

/// Chat message as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }

    fn from_turn(turn: &ChatTurn) -> Self {
        Self {
            role: turn.role.as_str(),
            content: turn.content.clone(),
        }
    }
}

/// Fixed answering rules.
pub fn answer_system_prompt() -> String {
    format!(
        "You are a helpful assistant for employees.\n\
         Rules:\n\
         1. Questions about the user themselves (their name, preferences, or other personal facts) \
         must be answered only from the MEMORY section.\n\
         2. Questions about documents or company policy must be answered only from the CONTEXT section.\n\
         3. If neither section contains the answer, reply with exactly: \"{DONT_KNOW_LITERAL}\"\n\
         Do not invent facts. Keep answers short."
    )
}

/// System prompt, caller history, then one user message carrying memory,
/// context and the question.
pub fn build_answer_messages(request: &CompletionRequest) -> Vec<Message> {
    let mut messages = Vec::with_capacity(request.history.len() + 2);
    messages.push(Message::system(answer_system_prompt()));
    messages.extend(request.history.iter().map(Message::from_turn));

    let memory = if request.memory_text.trim().is_empty() {
        "(none)"
    } else {
        request.memory_text.trim()
    };
    let context = if request.context.trim().is_empty() {
        "(none)"
    } else {
        request.context.trim()
    };
    messages.push(Message::user(format!(
        "MEMORY:\n{memory}\n\nCONTEXT:\n{context}\n\nQUESTION: {}",
        request.question.trim()
    )));
    messages
}

pub fn build_instruction_messages(instruction: &str, input: &str) -> Vec<Message> {
    vec![Message::system(instruction), Message::user(input)]
}
