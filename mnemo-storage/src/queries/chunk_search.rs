//! Brute-force nearest-chunk search.

use rusqlite::Connection;

use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{RetrievedChunk, SearchHit};

use crate::to_storage_err;
use crate::vector::{bytes_to_f32_vec, cosine_distance, similarity_from_distance};

/// The `top_k` nearest chunks by ascending cosine distance.
pub fn nearest_chunks(
    conn: &Connection,
    query: &[f32],
    top_k: usize,
) -> MnemoResult<Vec<RetrievedChunk>> {
    if top_k == 0 || query.is_empty() {
        return Ok(Vec::new());
    }

    let mut stmt = conn
        .prepare(
            "SELECT id, document_id, chunk_index, content, embedding
             FROM chunks WHERE dimensions = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([query.len() as i64], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, Vec<u8>>(4)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let (id, document_id, chunk_index, content, blob) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let embedding = bytes_to_f32_vec(&blob);
        results.push(RetrievedChunk {
            id,
            document_id,
            chunk_index,
            content,
            distance: cosine_distance(query, &embedding),
        });
    }

    results.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    results.truncate(top_k);
    Ok(results)
}

/// Up to `limit` chunks by descending similarity (`1 - distance`).
pub fn similar_chunks(conn: &Connection, query: &[f32], limit: usize) -> MnemoResult<Vec<SearchHit>> {
    Ok(nearest_chunks(conn, query, limit)?
        .into_iter()
        .map(|c| SearchHit {
            similarity: similarity_from_distance(c.distance),
            id: c.id,
            document_id: c.document_id,
            chunk_index: c.chunk_index,
            content: c.content,
        })
        .collect())
}
