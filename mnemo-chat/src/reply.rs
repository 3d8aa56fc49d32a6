use mnemo_core::models::RetrievalResult;

/// What the engine writes after a branch answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist {
    /// Nothing is written and the history is echoed unchanged.
    Nothing,
    /// Only the assistant answer is saved as a chat row.
    AnswerOnly,
    /// The user question and the assistant answer are saved as chat rows.
    QuestionAndAnswer,
}

/// Output of one terminal branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub answer: String,
    pub context_used: Vec<String>,
    pub memory_used: bool,
    pub chunks_returned: usize,
    pub persist: Persist,
}

impl Reply {
    pub fn new(answer: impl Into<String>, persist: Persist) -> Self {
        Self {
            answer: answer.into(),
            context_used: Vec::new(),
            memory_used: false,
            chunks_returned: 0,
            persist,
        }
    }

    pub fn with_memory_used(mut self, used: bool) -> Self {
        self.memory_used = used;
        self
    }

    /// Record the chunks the answer was grounded on.
    pub fn with_context(mut self, rag: &RetrievalResult) -> Self {
        self.context_used = rag.final_chunks.iter().map(|c| c.content.clone()).collect();
        self.chunks_returned = rag.meta.chunks_returned;
        self
    }
}
