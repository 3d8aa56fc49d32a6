//! Schema migrations using PRAGMA user_version.

pub mod v001_documents;
pub mod v002_user_memories;
pub mod v003_conversation_scope;

use rusqlite::Connection;

use mnemo_core::errors::{MnemoResult, StorageError};

/// Latest schema version.
pub const LATEST_VERSION: u32 = 3;

/// Run all pending migrations.
///
/// v003 (the optional conversation scoping column) only runs when
/// `conversation_scoping` is set; the schema then stays at v002 until a
/// later open enables it.
pub fn run_migrations(conn: &Connection, conversation_scoping: bool) -> MnemoResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[
        (v001_documents::MIGRATION_SQL, 1),
        (v002_user_memories::MIGRATION_SQL, 2),
        (v003_conversation_scope::MIGRATION_SQL, 3),
    ];

    for (sql, version) in migrations {
        if current >= *version {
            continue;
        }
        if *version == 3 && !conversation_scoping {
            tracing::debug!("conversation scoping disabled, skipping v003");
            break;
        }
        conn.execute_batch(sql)
            .map_err(|e| StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })?;
        tracing::info!(version = version, "applied migration");
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> MnemoResult<u32> {
    let version = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(version)
}
