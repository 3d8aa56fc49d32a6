pub mod chunk_ops;
pub mod chunk_search;
pub mod maintenance;
pub mod memory_crud;
pub mod memory_search;

use chrono::{DateTime, Utc};

/// Parse a stored timestamp. Unparseable or missing values become `None`.
pub(crate) fn parse_timestamp(raw: Option<String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
