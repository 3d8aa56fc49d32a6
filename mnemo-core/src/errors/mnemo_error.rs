use super::{CompletionError, ConfigError, EmbeddingError, StorageError};

/// HTTP statuses treated as transient by default.
pub const DEFAULT_RETRYABLE_STATUSES: [u16; 4] = [429, 500, 502, 503];

/// Top-level error type for the mnemo engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MnemoError {
    #[error("invalid {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("domain rule violated: {reason}")]
    DomainError { reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("completion error: {0}")]
    CompletionError(#[from] CompletionError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("internal error: {reason}")]
    Internal { reason: String },
}

pub type MnemoResult<T> = Result<T, MnemoError>;

/// Coarse error class used at the outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad caller input; the caller can fix and retry.
    Validation,
    /// Business-rule violation.
    Domain,
    /// Store or network failure.
    Infrastructure,
    /// Anything else.
    App,
}

impl MnemoError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn domain(reason: impl Into<String>) -> Self {
        Self::DomainError {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::DomainError { .. } => ErrorCategory::Domain,
            Self::StorageError(_) | Self::EmbeddingError(_) | Self::CompletionError(_) => {
                ErrorCategory::Infrastructure
            }
            Self::ConfigError(_) | Self::SerializationError(_) | Self::Internal { .. } => {
                ErrorCategory::App
            }
        }
    }

    /// Status code the HTTP boundary reports for this error.
    pub fn http_status(&self) -> u16 {
        match self.category() {
            ErrorCategory::Validation => 400,
            ErrorCategory::Domain => 422,
            ErrorCategory::Infrastructure => 502,
            ErrorCategory::App => 500,
        }
    }

    /// HTTP status returned by an upstream embedding/completion API, if any.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::EmbeddingError(EmbeddingError::HttpStatus { status, .. })
            | Self::CompletionError(CompletionError::HttpStatus { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Timeout or connection reset on an upstream call.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            Self::EmbeddingError(EmbeddingError::Timeout)
                | Self::EmbeddingError(EmbeddingError::ConnectionReset { .. })
                | Self::CompletionError(CompletionError::Timeout)
                | Self::CompletionError(CompletionError::ConnectionReset { .. })
        )
    }

    /// Whether the default retry set covers this error.
    pub fn is_transient(&self) -> bool {
        self.is_connection_failure()
            || self
                .upstream_status()
                .is_some_and(|s| DEFAULT_RETRYABLE_STATUSES.contains(&s))
    }
}
