/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("row decode failed in {table}: {reason}")]
    DecodeFailed { table: String, reason: String },

    #[error("connection lock poisoned: {details}")]
    LockPoisoned { details: String },
}
