//! # mnemo-storage
//!
//! SQLite-backed implementation of the memory and retrieval store ports.
//! Vectors are stored as little-endian f32 BLOBs and ranked in Rust.

pub mod capabilities;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod vector;

pub use engine::{StorageCounts, StorageEngine};

use mnemo_core::errors::{MnemoError, StorageError};

/// Convert a message into a storage error.
pub(crate) fn to_storage_err(message: String) -> MnemoError {
    StorageError::SqliteError { message }.into()
}
