//! Property tests: ranked output is sorted and the score is bounded.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use mnemo_core::models::{MemoryCandidate, MemoryType, Role};
use mnemo_memory::ranking::{rank, score_candidate, ScorerWeights};

fn arb_candidate() -> impl Strategy<Value = MemoryCandidate> {
    (0i64..10_000, 0.0f64..2.0, prop::option::of(0i64..120), any::<bool>()).prop_map(
        |(id, distance, age, is_fact)| MemoryCandidate {
            id,
            role: Role::User,
            content: format!("m{id}"),
            memory_key: is_fact.then(|| "k".to_string()),
            memory_type: if is_fact { MemoryType::Fact } else { MemoryType::Chat },
            updated_at: age.map(|d| Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() - Duration::days(d)),
            distance,
        },
    )
}

proptest! {
    #[test]
    fn prop_rank_is_sorted_descending(candidates in prop::collection::vec(arb_candidate(), 0..40)) {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let n = candidates.len();
        let ranked = rank(candidates, now, &ScorerWeights::default());
        prop_assert_eq!(ranked.len(), n);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn prop_score_bounds(c in arb_candidate()) {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let s = score_candidate(&c, now, &ScorerWeights::default());
        prop_assert!(s >= 0.0);
        prop_assert!(s <= 1.1 + 1e-9);
    }

    #[test]
    fn prop_rank_is_deterministic(candidates in prop::collection::vec(arb_candidate(), 0..20)) {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let a = rank(candidates.clone(), now, &ScorerWeights::default());
        let b = rank(candidates, now, &ScorerWeights::default());
        prop_assert_eq!(a, b);
    }
}
