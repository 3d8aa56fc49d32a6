pub mod scorer;

pub use scorer::{rank, recency_factor, score_candidate, similarity_factor, ScorerWeights};
