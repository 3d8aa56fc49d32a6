//! Optional schema capabilities, detected from the live database.

use rusqlite::Connection;

use mnemo_core::errors::MnemoResult;

use crate::to_storage_err;

/// Whether `table` has a column named `column`.
pub fn has_column(conn: &Connection, table: &str, column: &str) -> MnemoResult<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1)")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let names = stmt
        .query_map([table], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    for name in names {
        if name.map_err(|e| to_storage_err(e.to_string()))? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether user memories can be scoped to a conversation.
pub fn detect_conversation_scope(conn: &Connection) -> MnemoResult<bool> {
    has_column(conn, "user_memories", "conversation_id")
}
