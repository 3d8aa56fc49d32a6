use serde::{Deserialize, Serialize};

/// An ingested source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub filepath: String,
}

/// An ingested chunk. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: i64,
    pub document_id: i64,
    pub chunk_index: i64,
    pub content: String,
    pub embedding: Vec<f32>,
}

/// Chunk input for ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChunk {
    pub chunk_index: i64,
    pub content: String,
    pub embedding: Vec<f32>,
}

/// A chunk returned by a nearest-neighbour query, with its distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievedChunk {
    pub id: i64,
    pub document_id: i64,
    pub chunk_index: i64,
    pub content: String,
    pub distance: f64,
}
