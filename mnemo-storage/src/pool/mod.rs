//! One serialized writer plus, for file-backed stores, a read pool.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use mnemo_core::errors::MnemoResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory stores, where a second connection would see a
    /// different database.
    pub readers: Option<ReadPool>,
}

impl ConnectionPool {
    /// The writer opens first so the file and its WAL exist before readers attach.
    pub fn open(path: &Path, read_pool_size: usize) -> MnemoResult<Self> {
        let writer = WriteConnection::open(path)?;
        let readers = ReadPool::open(path, read_pool_size)?;
        Ok(Self {
            writer,
            readers: Some(readers),
        })
    }

    pub fn open_in_memory() -> MnemoResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: None,
        })
    }

    /// Run a read on a pooled reader, or on the writer when there is none.
    pub fn read<F, T>(&self, f: F) -> MnemoResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> MnemoResult<T>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn_sync(f),
        }
    }
}
