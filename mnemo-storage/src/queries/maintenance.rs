//! Row counts for diagnostics.

use rusqlite::Connection;

use mnemo_core::errors::MnemoResult;

use crate::to_storage_err;

pub fn count_rows(conn: &Connection, table: &str) -> MnemoResult<usize> {
    let count: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .map_err(|e| to_storage_err(format!("count {table}: {e}")))?;
    Ok(count as usize)
}
