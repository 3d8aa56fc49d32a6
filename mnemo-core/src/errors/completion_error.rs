/// Completion port errors.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion request timed out")]
    Timeout,

    #[error("completion connection reset: {reason}")]
    ConnectionReset { reason: String },

    #[error("completion API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("completion request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("invalid completion response: {reason}")]
    InvalidResponse { reason: String },
}
