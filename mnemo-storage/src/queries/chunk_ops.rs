//! Document and chunk ingestion.

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection};

use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{Chunk, Document, NewChunk};

use crate::to_storage_err;
use crate::vector::{bytes_to_f32_vec, f32_vec_to_bytes};

/// Insert a document, or return the existing row for the same filepath.
pub fn upsert_document(conn: &Connection, title: &str, filepath: &str) -> MnemoResult<Document> {
    conn.execute(
        "INSERT INTO documents (title, filepath, created_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(filepath) DO UPDATE SET title = excluded.title",
        params![title, filepath, Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)],
    )
    .map_err(|e| to_storage_err(format!("upsert document: {e}")))?;

    conn.query_row(
        "SELECT id, title, filepath FROM documents WHERE filepath = ?1",
        params![filepath],
        |row| {
            Ok(Document {
                id: row.get(0)?,
                title: row.get(1)?,
                filepath: row.get(2)?,
            })
        },
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert chunks for a document inside one transaction.
/// Existing `(document_id, chunk_index)` pairs are left untouched.
/// Returns the number of newly inserted chunks.
pub fn insert_chunks(conn: &Connection, document_id: i64, chunks: &[NewChunk]) -> MnemoResult<usize> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut inserted = 0;
    {
        let mut stmt = tx
            .prepare_cached(
                "INSERT INTO chunks (document_id, chunk_index, content, embedding, dimensions)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(document_id, chunk_index) DO NOTHING",
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        for chunk in chunks {
            inserted += stmt
                .execute(params![
                    document_id,
                    chunk.chunk_index,
                    chunk.content,
                    f32_vec_to_bytes(&chunk.embedding),
                    chunk.embedding.len() as i64,
                ])
                .map_err(|e| to_storage_err(format!("insert chunk: {e}")))?;
        }
    }
    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
    Ok(inserted)
}

/// All chunks of a document in index order.
pub fn chunks_for_document(conn: &Connection, document_id: i64) -> MnemoResult<Vec<Chunk>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, document_id, chunk_index, content, embedding
             FROM chunks WHERE document_id = ?1 ORDER BY chunk_index",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![document_id], |row| {
            let blob: Vec<u8> = row.get(4)?;
            Ok(Chunk {
                id: row.get(0)?,
                document_id: row.get(1)?,
                chunk_index: row.get(2)?,
                content: row.get(3)?,
                embedding: bytes_to_f32_vec(&blob),
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
