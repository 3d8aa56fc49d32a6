//! # mnemo-completion
//!
//! `ICompletionProvider` over an OpenAI-compatible chat-completions API,
//! plus an engine that adds the bounded retry policy.

pub mod api_provider;
pub mod engine;
pub mod prompt;

pub use api_provider::ApiProvider;
pub use engine::CompletionEngine;
