//! Error handling for mnemo.
//! One error enum per subsystem, `thiserror` only, aggregated by [`MnemoError`].

pub mod completion_error;
pub mod config_error;
pub mod embedding_error;
pub mod mnemo_error;
pub mod storage_error;

pub use completion_error::CompletionError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use mnemo_error::{ErrorCategory, MnemoError, MnemoResult};
pub use storage_error::StorageError;
