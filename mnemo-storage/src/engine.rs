//! StorageEngine: owns the ConnectionPool and implements the memory and
//! retrieval store ports.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use mnemo_core::config::StorageConfig;
use mnemo_core::config::defaults::DEFAULT_READ_POOL_SIZE;
use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{
    Chunk, Document, Fact, MemoryCandidate, MemoryType, NewChunk, NewMemory, RetrievedChunk, SavedMemory,
    SearchHit,
};
use mnemo_core::traits::{IMemoryStore, IRetrievalStore, MemoryQuery};

use crate::capabilities;
use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{chunk_ops, chunk_search, maintenance, memory_crud, memory_search};

/// Row counts per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageCounts {
    pub documents: usize,
    pub chunks: usize,
    pub memories: usize,
}

pub struct StorageEngine {
    pool: ConnectionPool,
    /// Detected once, at open, right after migrations.
    conversation_scope: bool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk, with conversation scoping.
    pub fn open(path: &Path) -> MnemoResult<Self> {
        let pool = ConnectionPool::open(path, DEFAULT_READ_POOL_SIZE)?;
        Self::initialize(pool, true)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> MnemoResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        Self::initialize(pool, true)
    }

    /// Open according to the storage config. No `db_path` means in-memory.
    pub fn open_with_config(config: &StorageConfig) -> MnemoResult<Self> {
        match &config.db_path {
            Some(path) => {
                let pool = ConnectionPool::open(Path::new(path), config.read_pool_size)?;
                Self::initialize(pool, config.conversation_scoping)
            }
            None => {
                let pool = ConnectionPool::open_in_memory()?;
                Self::initialize(pool, config.conversation_scoping)
            }
        }
    }

    fn initialize(pool: ConnectionPool, conversation_scoping: bool) -> MnemoResult<Self> {
        let conversation_scope = pool.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn, conversation_scoping)?;
            capabilities::detect_conversation_scope(conn)
        })?;
        debug!(conversation_scope, "detected memory schema capability");
        Ok(Self {
            pool,
            conversation_scope,
        })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    fn with_reader<F, T>(&self, f: F) -> MnemoResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> MnemoResult<T>,
    {
        self.pool.read(f)
    }

    /// Save a memory with an explicit write time.
    pub fn save_with_timestamp(
        &self,
        memory: &NewMemory,
        at: DateTime<Utc>,
    ) -> MnemoResult<SavedMemory> {
        let scoped = self.conversation_scope;
        self.pool
            .writer
            .with_conn_sync(|conn| memory_crud::save_memory(conn, memory, scoped, at))
    }

    pub fn upsert_document(&self, title: &str, filepath: &str) -> MnemoResult<Document> {
        self.pool
            .writer
            .with_conn_sync(|conn| chunk_ops::upsert_document(conn, title, filepath))
    }

    /// Insert chunks for a document. Returns how many were new.
    pub fn insert_chunks(&self, document_id: i64, chunks: &[NewChunk]) -> MnemoResult<usize> {
        self.pool
            .writer
            .with_conn_sync(|conn| chunk_ops::insert_chunks(conn, document_id, chunks))
    }

    pub fn chunks_for_document(&self, document_id: i64) -> MnemoResult<Vec<Chunk>> {
        self.with_reader(|conn| chunk_ops::chunks_for_document(conn, document_id))
    }

    /// Memory rows stored for a user, optionally of one type.
    pub fn memory_count(&self, user_id: &str, memory_type: Option<MemoryType>) -> MnemoResult<usize> {
        self.with_reader(|conn| memory_crud::count_for_user(conn, user_id, memory_type))
    }

    pub fn counts(&self) -> MnemoResult<StorageCounts> {
        self.with_reader(|conn| {
            Ok(StorageCounts {
                documents: maintenance::count_rows(conn, "documents")?,
                chunks: maintenance::count_rows(conn, "chunks")?,
                memories: maintenance::count_rows(conn, "user_memories")?,
            })
        })
    }
}

impl IMemoryStore for StorageEngine {
    fn save(&self, memory: &NewMemory) -> MnemoResult<SavedMemory> {
        self.save_with_timestamp(memory, Utc::now())
    }

    fn nearest(&self, query: &MemoryQuery<'_>) -> MnemoResult<Vec<MemoryCandidate>> {
        let scoped = self.conversation_scope;
        self.with_reader(|conn| memory_search::nearest_memories(conn, query, scoped))
    }

    fn latest_facts(&self, user_id: &str) -> MnemoResult<Vec<Fact>> {
        self.with_reader(|conn| memory_search::latest_facts(conn, user_id))
    }

    fn supports_conversation_scope(&self) -> MnemoResult<bool> {
        Ok(self.conversation_scope)
    }
}

impl IRetrievalStore for StorageEngine {
    fn nearest_chunks(&self, embedding: &[f32], top_k: usize) -> MnemoResult<Vec<RetrievedChunk>> {
        self.with_reader(|conn| chunk_search::nearest_chunks(conn, embedding, top_k))
    }

    fn similar_chunks(&self, embedding: &[f32], limit: usize) -> MnemoResult<Vec<SearchHit>> {
        self.with_reader(|conn| chunk_search::similar_chunks(conn, embedding, limit))
    }
}
