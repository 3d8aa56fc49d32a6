//! Fact upsert and chat append for user memories.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};

use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{MemoryType, NewMemory, SavedMemory};

use crate::to_storage_err;
use crate::vector::f32_vec_to_bytes;

/// Write a memory row.
///
/// Keyed facts upsert on `(user_id, memory_key)` in a single statement so
/// concurrent writers for the same key leave exactly one row. Everything
/// else is appended as a chat row with a NULL key.
pub fn save_memory(
    conn: &Connection,
    memory: &NewMemory,
    conversation_scoped: bool,
    at: DateTime<Utc>,
) -> MnemoResult<SavedMemory> {
    if memory.is_keyed_fact() {
        upsert_fact(conn, memory, at)
    } else {
        append_chat(conn, memory, conversation_scoped, at)
    }
}

fn upsert_fact(conn: &Connection, memory: &NewMemory, at: DateTime<Utc>) -> MnemoResult<SavedMemory> {
    let blob = f32_vec_to_bytes(&memory.embedding);
    let updated_at = at.to_rfc3339_opts(SecondsFormat::Micros, true);

    let id: i64 = conn
        .query_row(
            "INSERT INTO user_memories (
                user_id, role, content, embedding, dimensions, memory_key, memory_type, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'fact', ?7)
            ON CONFLICT(user_id, memory_key) DO UPDATE SET
                role = excluded.role,
                content = excluded.content,
                embedding = excluded.embedding,
                dimensions = excluded.dimensions,
                memory_type = 'fact',
                updated_at = excluded.updated_at
            RETURNING id",
            params![
                memory.user_id,
                memory.role.as_str(),
                memory.content,
                blob,
                memory.embedding.len() as i64,
                memory.memory_key,
                updated_at,
            ],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(format!("upsert fact: {e}")))?;

    Ok(SavedMemory {
        id,
        user_id: memory.user_id.clone(),
        role: memory.role,
        content: memory.content.clone(),
        memory_key: memory.memory_key.clone(),
        memory_type: MemoryType::Fact,
        updated_at: Some(at),
    })
}

fn append_chat(
    conn: &Connection,
    memory: &NewMemory,
    conversation_scoped: bool,
    at: DateTime<Utc>,
) -> MnemoResult<SavedMemory> {
    let blob = f32_vec_to_bytes(&memory.embedding);
    let updated_at = at.to_rfc3339_opts(SecondsFormat::Micros, true);
    let dims = memory.embedding.len() as i64;

    if conversation_scoped {
        conn.execute(
            "INSERT INTO user_memories (
                user_id, role, content, embedding, dimensions, memory_key, memory_type,
                updated_at, conversation_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, NULL, 'chat', ?6, ?7)",
            params![
                memory.user_id,
                memory.role.as_str(),
                memory.content,
                blob,
                dims,
                updated_at,
                memory.conversation_id,
            ],
        )
    } else {
        conn.execute(
            "INSERT INTO user_memories (
                user_id, role, content, embedding, dimensions, memory_key, memory_type, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, NULL, 'chat', ?6)",
            params![
                memory.user_id,
                memory.role.as_str(),
                memory.content,
                blob,
                dims,
                updated_at,
            ],
        )
    }
    .map_err(|e| to_storage_err(format!("append chat: {e}")))?;

    Ok(SavedMemory {
        id: conn.last_insert_rowid(),
        user_id: memory.user_id.clone(),
        role: memory.role,
        content: memory.content.clone(),
        memory_key: None,
        memory_type: MemoryType::Chat,
        updated_at: Some(at),
    })
}

/// Number of memory rows for a user, optionally of one type.
pub fn count_for_user(
    conn: &Connection,
    user_id: &str,
    memory_type: Option<MemoryType>,
) -> MnemoResult<usize> {
    let count: i64 = match memory_type {
        Some(t) => conn.query_row(
            "SELECT COUNT(*) FROM user_memories WHERE user_id = ?1 AND memory_type = ?2",
            params![user_id, t.as_str()],
            |row| row.get(0),
        ),
        None => conn.query_row(
            "SELECT COUNT(*) FROM user_memories WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        ),
    }
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
