//! Chunk ingestion and nearest-chunk queries.

use mnemo_core::models::NewChunk;
use mnemo_core::traits::IRetrievalStore;
use mnemo_storage::StorageEngine;

fn chunk(index: i64, content: &str, embedding: Vec<f32>) -> NewChunk {
    NewChunk {
        chunk_index: index,
        content: content.to_string(),
        embedding,
    }
}

fn seeded() -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    let doc = engine.upsert_document("Handbook", "docs/handbook.md").unwrap();
    engine
        .insert_chunks(
            doc.id,
            &[
                chunk(0, "Coffee breaks are limited to one per hour.", vec![1.0, 0.0, 0.0]),
                chunk(1, "Remote work requires approval.", vec![0.0, 1.0, 0.0]),
                chunk(2, "Leave requests go through HR.", vec![0.7, 0.7, 0.0]),
            ],
        )
        .unwrap();
    engine
}

#[test]
fn upsert_document_is_idempotent_on_filepath() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let a = engine.upsert_document("Handbook", "docs/handbook.md").unwrap();
    let b = engine.upsert_document("Handbook v2", "docs/handbook.md").unwrap();
    assert_eq!(a.id, b.id);
    assert_eq!(b.title, "Handbook v2");
    assert_eq!(engine.counts().unwrap().documents, 1);
}

#[test]
fn reinserting_chunks_does_not_duplicate() {
    let engine = seeded();
    let doc = engine.upsert_document("Handbook", "docs/handbook.md").unwrap();
    let inserted = engine
        .insert_chunks(doc.id, &[chunk(0, "changed", vec![0.0, 0.0, 1.0])])
        .unwrap();
    assert_eq!(inserted, 0);

    let chunks = engine.chunks_for_document(doc.id).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].content, "Coffee breaks are limited to one per hour.");
    assert_eq!(chunks[0].embedding, vec![1.0, 0.0, 0.0]);
}

#[test]
fn nearest_chunks_ascending_distance() {
    let engine = seeded();
    let results = engine.nearest_chunks(&[1.0, 0.0, 0.0], 2).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].chunk_index, 0);
    assert_eq!(results[1].chunk_index, 2);
    assert!(results[0].distance < results[1].distance);
}

#[test]
fn similar_chunks_descending_similarity() {
    let engine = seeded();
    let hits = engine.similar_chunks(&[0.0, 1.0, 0.0], 3).unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].chunk_index, 1);
    assert!((hits[0].similarity - 1.0).abs() < 1e-6);
    for pair in hits.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
}

#[test]
fn empty_corpus_returns_empty() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert!(engine.nearest_chunks(&[1.0, 0.0], 5).unwrap().is_empty());
    assert!(engine.similar_chunks(&[1.0, 0.0], 5).unwrap().is_empty());
}

#[test]
fn counts_report_all_tables() {
    let engine = seeded();
    let counts = engine.counts().unwrap();
    assert_eq!(counts.documents, 1);
    assert_eq!(counts.chunks, 3);
    assert_eq!(counts.memories, 0);
}
