//! Property tests for the threshold filter.

use proptest::prelude::*;

use mnemo_core::models::RetrievedChunk;
use mnemo_retrieval::apply_threshold;

fn arb_chunks() -> impl Strategy<Value = Vec<RetrievedChunk>> {
    prop::collection::vec(0.0f64..2.0, 0..10).prop_map(|mut distances| {
        distances.sort_by(|a, b| a.partial_cmp(b).unwrap());
        distances
            .into_iter()
            .enumerate()
            .map(|(i, distance)| RetrievedChunk {
                id: i as i64,
                document_id: 1,
                chunk_index: i as i64,
                content: format!("chunk {i}"),
                distance,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_final_never_empty_when_raw_non_empty(chunks in arb_chunks(), threshold in 0.0f64..2.0) {
        let n = chunks.len();
        let r = apply_threshold(chunks, n, threshold);
        prop_assert_eq!(r.final_chunks.is_empty(), r.raw_chunks.is_empty());
        prop_assert_eq!(r.meta.chunks_returned, r.final_chunks.len());
    }

    #[test]
    fn prop_filtered_within_threshold(chunks in arb_chunks(), threshold in 0.0f64..2.0) {
        let n = chunks.len();
        let r = apply_threshold(chunks, n, threshold);
        prop_assert!(r.filtered_chunks.iter().all(|c| c.distance <= threshold));
        if r.filtered_chunks.is_empty() {
            prop_assert_eq!(&r.final_chunks, &r.raw_chunks);
        } else {
            prop_assert_eq!(&r.final_chunks, &r.filtered_chunks);
        }
    }
}
