//! # mnemo-memory
//!
//! Save policy (fact upsert vs chat append), ranked recall over the raw
//! store results, and the current-value view of keyed facts.

pub mod engine;
pub mod ranking;

pub use engine::MemoryEngine;
pub use ranking::{rank, ScorerWeights};
