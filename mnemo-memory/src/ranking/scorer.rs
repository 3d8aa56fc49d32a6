//! Composite memory scorer.
//!
//! `score = similarity * 0.6 + recency * 0.3 + type_boost`, where
//! similarity is `clamp(1 - distance, 0, 1)`, recency decays linearly to
//! zero over 30 days (0.5 when the row has no timestamp), and fact rows get
//! a flat 0.2 boost.

use chrono::{DateTime, Utc};

use mnemo_core::constants::{
    RANK_FACT_BOOST, RANK_RECENCY_UNKNOWN, RANK_RECENCY_WEIGHT, RANK_RECENCY_WINDOW_DAYS,
    RANK_SIMILARITY_WEIGHT,
};
use mnemo_core::models::{MemoryCandidate, MemoryType, RankedMemory};

#[derive(Debug, Clone, PartialEq)]
pub struct ScorerWeights {
    pub similarity: f64,
    pub recency: f64,
    pub fact_boost: f64,
    pub recency_window_days: f64,
    pub unknown_recency: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            similarity: RANK_SIMILARITY_WEIGHT,
            recency: RANK_RECENCY_WEIGHT,
            fact_boost: RANK_FACT_BOOST,
            recency_window_days: RANK_RECENCY_WINDOW_DAYS,
            unknown_recency: RANK_RECENCY_UNKNOWN,
        }
    }
}

pub fn similarity_factor(distance: f64) -> f64 {
    (1.0 - distance).clamp(0.0, 1.0)
}

/// Linear decay over the window. Future timestamps count as fresh.
pub fn recency_factor(
    updated_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    weights: &ScorerWeights,
) -> f64 {
    match updated_at {
        Some(ts) => {
            let age_days = (now - ts).num_milliseconds() as f64 / 86_400_000.0;
            (1.0 - age_days / weights.recency_window_days).clamp(0.0, 1.0)
        }
        None => weights.unknown_recency,
    }
}

pub fn score_candidate(
    candidate: &MemoryCandidate,
    now: DateTime<Utc>,
    weights: &ScorerWeights,
) -> f64 {
    let type_boost = match candidate.memory_type {
        MemoryType::Fact => weights.fact_boost,
        MemoryType::Chat => 0.0,
    };
    similarity_factor(candidate.distance) * weights.similarity
        + recency_factor(candidate.updated_at, now, weights) * weights.recency
        + type_boost
}

/// Score every candidate and sort by descending score.
/// Ties keep the store's distance order.
pub fn rank(
    candidates: Vec<MemoryCandidate>,
    now: DateTime<Utc>,
    weights: &ScorerWeights,
) -> Vec<RankedMemory> {
    let mut ranked: Vec<RankedMemory> = candidates
        .into_iter()
        .map(|candidate| RankedMemory {
            score: score_candidate(&candidate, now, weights),
            candidate,
        })
        .collect();
    // sort_by is stable, so equal scores stay in distance order.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}
