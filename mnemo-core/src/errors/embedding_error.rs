/// Embedding port errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding request timed out")]
    Timeout,

    #[error("embedding connection reset: {reason}")]
    ConnectionReset { reason: String },

    #[error("embedding API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("embedding request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("invalid embedding response: {reason}")]
    InvalidResponse { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}
