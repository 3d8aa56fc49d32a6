//! # mnemo-embeddings
//!
//! Text → vector providers behind `IEmbeddingProvider`, wrapped by an
//! engine that adds bounded retry and an L1 cache keyed by content hash.

pub mod cache;
pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::{create_provider, ApiProvider, TfIdfFallback};
