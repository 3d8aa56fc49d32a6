//! Per-connection PRAGMA tables.

use rusqlite::Connection;

use mnemo_core::errors::MnemoResult;

use crate::to_storage_err;

/// Which side of the pool a connection serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionRole {
    Writer,
    Reader,
}

const WRITER_PRAGMAS: &[(&str, &str)] = &[
    ("journal_mode", "WAL"),
    ("synchronous", "NORMAL"),
    ("foreign_keys", "ON"),
    ("busy_timeout", "5000"),
    ("cache_size", "-32000"),
];

// Read-only handles must not touch the journal mode.
const READER_PRAGMAS: &[(&str, &str)] = &[("busy_timeout", "5000"), ("cache_size", "-16000")];

pub fn pragmas_for(role: ConnectionRole) -> &'static [(&'static str, &'static str)] {
    match role {
        ConnectionRole::Writer => WRITER_PRAGMAS,
        ConnectionRole::Reader => READER_PRAGMAS,
    }
}

pub fn apply_pragmas(conn: &Connection, role: ConnectionRole) -> MnemoResult<()> {
    let batch: String = pragmas_for(role)
        .iter()
        .map(|(name, value)| format!("PRAGMA {name} = {value};\n"))
        .collect();
    conn.execute_batch(&batch)
        .map_err(|e| to_storage_err(format!("applying {role:?} pragmas: {e}")))
}

/// Whether the connection's journal is in WAL mode.
pub fn verify_wal_mode(conn: &Connection) -> MnemoResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
