//! RetrievalEngine over the SQLite store with the hash embedder.

use std::sync::Arc;

use mnemo_core::models::NewChunk;
use mnemo_core::traits::IEmbeddingProvider;
use mnemo_retrieval::{build_context, RetrievalEngine};
use mnemo_storage::StorageEngine;
use test_fixtures::HashEmbedder;

const HANDBOOK: [&str; 3] = [
    "Coffee breaks are limited to one per hour.",
    "Remote work requires manager approval.",
    "Annual leave requests go through HR.",
];

fn setup() -> (RetrievalEngine, HashEmbedder) {
    let embedder = HashEmbedder::default();
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let doc = store.upsert_document("Handbook", "handbook.md").unwrap();
    let chunks: Vec<NewChunk> = HANDBOOK
        .iter()
        .enumerate()
        .map(|(i, text)| NewChunk {
            chunk_index: i as i64,
            content: text.to_string(),
            embedding: embedder.embed(text).unwrap(),
        })
        .collect();
    store.insert_chunks(doc.id, &chunks).unwrap();
    (RetrievalEngine::new(store), embedder)
}

#[test]
fn exact_match_passes_threshold() {
    let (engine, embedder) = setup();
    let q = embedder.embed(HANDBOOK[1]).unwrap();
    let result = engine.retrieve(&q, 3, 0.1).unwrap();
    assert_eq!(result.filtered_chunks.len(), 1);
    assert_eq!(result.final_chunks[0].content, HANDBOOK[1]);
    assert!(!result.used_fallback());
}

#[test]
fn strict_threshold_falls_back_to_raw() {
    let (engine, embedder) = setup();
    let q = embedder.embed("is coffee every hour against the rules").unwrap();
    let result = engine.retrieve(&q, 2, 0.0).unwrap();
    assert!(result.filtered_chunks.is_empty());
    assert_eq!(result.final_chunks.len(), 2);
    assert_eq!(result.final_chunks, result.raw_chunks);
    assert_eq!(result.meta.chunks_returned, 2);
    assert!(build_context(&result.final_chunks).contains("\n\n---\n\n"));
}

#[test]
fn semantic_search_is_similarity_ranked() {
    let (engine, embedder) = setup();
    let q = embedder.embed("coffee breaks").unwrap();
    let hits = engine.semantic_search(&q, 3).unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].content, HANDBOOK[0]);
    for pair in hits.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}
