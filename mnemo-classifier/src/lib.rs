//! # mnemo-classifier
//!
//! Turns a raw question into an optional [`FactCandidate`] and a
//! [`HighLevelIntent`]. The garbage filter and the fast paths never touch
//! the network; extraction costs one completion call and never fails on
//! malformed model output.
//!
//! [`FactCandidate`]: mnemo_core::models::FactCandidate
//! [`HighLevelIntent`]: mnemo_core::models::HighLevelIntent

pub mod classifier;
pub mod extractor;
pub mod fast_paths;
pub mod garbage;
pub mod intent;
pub mod vocabulary;

pub use classifier::{Classification, Classifier};
pub use fast_paths::FastPaths;
pub use intent::detect_high_level_intent;
pub use vocabulary::Vocabulary;
