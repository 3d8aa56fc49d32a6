//! # mnemo-retrieval
//!
//! Nearest-chunk lookup with a distance threshold and an unfiltered
//! fallback, context assembly, and the similarity-ranked search surface.

pub mod context;
pub mod engine;
pub mod filter;

pub use context::build_context;
pub use engine::RetrievalEngine;
pub use filter::apply_threshold;
