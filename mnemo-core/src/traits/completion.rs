use crate::errors::MnemoResult;
use crate::models::ChatTurn;

/// Inputs for an answer completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionRequest {
    pub question: String,
    /// Assembled document context; empty when no chunks were used.
    pub context: String,
    pub history: Vec<ChatTurn>,
    /// Facts and recalled chat lines about the user; may be empty.
    pub memory_text: String,
}

/// LLM completion port.
///
/// `complete` must answer personal-identity questions only from
/// `memory_text`, document questions only from `context`, and return the
/// exact literal [`crate::constants::DONT_KNOW_LITERAL`] when neither applies.
pub trait ICompletionProvider: Send + Sync {
    /// Answer a question from the given context, history and memory text.
    fn complete(&self, request: &CompletionRequest) -> MnemoResult<String>;

    /// Run a raw instruction prompt (used for structured extraction).
    fn prompt(&self, instruction: &str, input: &str) -> MnemoResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
