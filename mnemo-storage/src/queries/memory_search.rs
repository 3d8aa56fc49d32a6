//! Distance-ordered memory lookup and latest-fact projection.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};

use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{Fact, MemoryCandidate, MemoryType, Role};
use mnemo_core::traits::MemoryQuery;

use super::parse_timestamp;
use crate::to_storage_err;
use crate::vector::{bytes_to_f32_vec, cosine_distance};

struct RawMemoryRow {
    id: i64,
    role: String,
    content: String,
    memory_key: Option<String>,
    memory_type: String,
    updated_at: Option<String>,
    embedding: Vec<u8>,
}

/// Up to `query.limit` memories ordered by ascending cosine distance.
///
/// When `conversation_scoped` is set and the query names a conversation,
/// chat rows from other conversations are excluded. Facts are never
/// conversation-scoped. Rows whose vector dimensions differ from the
/// query are skipped.
pub fn nearest_memories(
    conn: &Connection,
    query: &MemoryQuery<'_>,
    conversation_scoped: bool,
) -> MnemoResult<Vec<MemoryCandidate>> {
    if query.limit == 0 {
        return Ok(Vec::new());
    }

    let mut sql = String::from(
        "SELECT id, role, content, memory_key, memory_type, updated_at, embedding
         FROM user_memories
         WHERE user_id = ?",
    );
    let mut args: Vec<Value> = vec![Value::Text(query.user_id.to_string())];

    if let Some(role) = query.role {
        sql.push_str(" AND role = ?");
        args.push(Value::Text(role.as_str().to_string()));
    }
    if let (true, Some(conversation)) = (conversation_scoped, query.conversation_id) {
        sql.push_str(" AND (memory_type = 'fact' OR conversation_id = ?)");
        args.push(Value::Text(conversation.to_string()));
    }

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(format!("prepare memory search: {e}")))?;
    let rows = stmt
        .query_map(params_from_iter(args), |row| {
            Ok(RawMemoryRow {
                id: row.get(0)?,
                role: row.get(1)?,
                content: row.get(2)?,
                memory_key: row.get(3)?,
                memory_type: row.get(4)?,
                updated_at: row.get(5)?,
                embedding: row.get(6)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut candidates = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        let embedding = bytes_to_f32_vec(&raw.embedding);
        if embedding.len() != query.embedding.len() {
            continue;
        }
        candidates.push(MemoryCandidate {
            id: raw.id,
            role: raw.role.parse::<Role>()?,
            content: raw.content,
            memory_key: raw.memory_key,
            memory_type: raw.memory_type.parse::<MemoryType>()?,
            updated_at: parse_timestamp(raw.updated_at),
            distance: cosine_distance(query.embedding, &embedding),
        });
    }

    candidates.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    candidates.truncate(query.limit);
    Ok(candidates)
}

/// The most recently written row per distinct memory key, newest first.
pub fn latest_facts(conn: &Connection, user_id: &str) -> MnemoResult<Vec<Fact>> {
    let mut stmt = conn
        .prepare(
            "SELECT memory_key, content, updated_at FROM (
                SELECT memory_key, content, updated_at,
                       ROW_NUMBER() OVER (
                           PARTITION BY memory_key
                           ORDER BY updated_at DESC, id DESC
                       ) AS rn
                FROM user_memories
                WHERE user_id = ?1 AND memory_key IS NOT NULL
            )
            WHERE rn = 1
            ORDER BY updated_at DESC, memory_key ASC",
        )
        .map_err(|e| to_storage_err(format!("prepare latest facts: {e}")))?;

    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut facts = Vec::new();
    for row in rows {
        let (key, value, updated_at) = row.map_err(|e| to_storage_err(e.to_string()))?;
        facts.push(Fact {
            key,
            value,
            updated_at: parse_timestamp(updated_at),
        });
    }
    Ok(facts)
}
