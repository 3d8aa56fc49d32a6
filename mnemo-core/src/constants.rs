/// mnemo version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator placed between chunk contents when assembling RAG context.
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Exact literal the completion port returns when neither memory nor
/// document context can answer the question.
pub const DONT_KNOW_LITERAL: &str = "I don't know from the document.";

/// Minimum trimmed length for a question to be considered meaningful.
pub const MIN_QUESTION_CHARS: usize = 4;

/// Letter count at or above which a question is never treated as garbage.
pub const GARBAGE_MAX_LETTERS: usize = 20;

/// Terminal punctuation count that marks noisy input.
pub const GARBAGE_MIN_TERMINAL_PUNCT: usize = 2;

/// Over-fetch multiplier for ranked memory retrieval.
pub const MEMORY_OVERFETCH_FACTOR: usize = 3;

/// Ranking weight applied to vector similarity.
pub const RANK_SIMILARITY_WEIGHT: f64 = 0.6;

/// Ranking weight applied to recency.
pub const RANK_RECENCY_WEIGHT: f64 = 0.3;

/// Flat score boost for fact rows.
pub const RANK_FACT_BOOST: f64 = 0.2;

/// Age (days) at which the recency factor reaches zero.
pub const RANK_RECENCY_WINDOW_DAYS: f64 = 30.0;

/// Recency used for rows without a timestamp.
pub const RANK_RECENCY_UNKNOWN: f64 = 0.5;
