//! The single write connection, serialized behind a mutex.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use mnemo_core::errors::{MnemoResult, StorageError};

use super::pragmas::{apply_pragmas, ConnectionRole};
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path) -> MnemoResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, ConnectionRole::Writer)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> MnemoResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, ConnectionRole::Writer)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with exclusive access to the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> MnemoResult<T>
    where
        F: FnOnce(&Connection) -> MnemoResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::LockPoisoned {
            details: format!("write connection: {e}"),
        })?;
        f(&guard)
    }
}
