//! Read-only connections for a file-backed store.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use mnemo_core::errors::{MnemoResult, StorageError};

use super::pragmas::{apply_pragmas, ConnectionRole};
use crate::to_storage_err;

const MAX_READERS: usize = 8;

/// Read-only connections handed out round-robin. WAL lets them run
/// alongside the writer.
pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// `size` is clamped to `1..=8`.
    pub fn open(path: &Path, size: usize) -> MnemoResult<Self> {
        let connections = (0..size.clamp(1, MAX_READERS))
            .map(|_| {
                let conn = Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map_err(|e| to_storage_err(format!("opening reader: {e}")))?;
                apply_pragmas(&conn, ConnectionRole::Reader)?;
                Ok(Mutex::new(conn))
            })
            .collect::<MnemoResult<Vec<_>>>()?;
        Ok(Self {
            connections,
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> MnemoResult<T>
    where
        F: FnOnce(&Connection) -> MnemoResult<T>,
    {
        let slot = self.cursor.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let conn = self.connections[slot]
            .lock()
            .map_err(|e| StorageError::LockPoisoned {
                details: format!("reader {slot}: {e}"),
            })?;
        f(&conn)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
