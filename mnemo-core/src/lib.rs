//! # mnemo-core
//!
//! Foundation crate for the mnemo conversational retrieval engine.
//! Defines the data model, port traits, errors, config, the bounded retry
//! wrapper and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod retry;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MnemoConfig;
pub use errors::{ErrorCategory, MnemoError, MnemoResult};
pub use models::{
    ChatRequest, ChatResponse, ChatTurn, FactCandidate, FactIntent, HighLevelIntent, MemoryType,
    Role,
};
pub use retry::RetryPolicy;
