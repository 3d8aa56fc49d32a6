use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::MnemoError;

/// Author of a turn or memory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = MnemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(MnemoError::validation("role", format!("unknown role '{other}'"))),
        }
    }
}

/// Kind of memory row. Facts are keyed and upserted, chat rows are append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryType {
    Fact,
    Chat,
}

impl MemoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fact => "fact",
            Self::Chat => "chat",
        }
    }
}

impl FromStr for MemoryType {
    type Err = MnemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fact" => Ok(Self::Fact),
            "chat" => Ok(Self::Chat),
            other => Err(MnemoError::validation(
                "memory_type",
                format!("unknown memory type '{other}'"),
            )),
        }
    }
}

/// A stored memory row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: i64,
    pub user_id: String,
    pub role: Role,
    pub content: String,
    pub embedding: Vec<f32>,
    /// Set only for fact rows.
    pub memory_key: Option<String>,
    pub memory_type: MemoryType,
    pub conversation_id: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for a store write. The store decides between upsert and append.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMemory {
    pub user_id: String,
    pub role: Role,
    pub content: String,
    pub embedding: Vec<f32>,
    pub memory_key: Option<String>,
    pub memory_type: MemoryType,
    pub conversation_id: Option<String>,
}

impl NewMemory {
    /// Whether this write targets the keyed fact slot.
    pub fn is_keyed_fact(&self) -> bool {
        self.memory_type == MemoryType::Fact && self.memory_key.is_some()
    }
}

/// Result of a memory write, without the embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMemory {
    pub id: i64,
    pub user_id: String,
    pub role: Role,
    pub content: String,
    pub memory_key: Option<String>,
    pub memory_type: MemoryType,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A memory row returned by a distance-ordered store query.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCandidate {
    pub id: i64,
    pub role: Role,
    pub content: String,
    pub memory_key: Option<String>,
    pub memory_type: MemoryType,
    pub updated_at: Option<DateTime<Utc>>,
    /// Raw vector distance to the query.
    pub distance: f64,
}

/// A candidate after composite re-ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMemory {
    pub candidate: MemoryCandidate,
    pub score: f64,
}

/// The current value of one keyed fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub key: String,
    pub value: String,
    pub updated_at: Option<DateTime<Utc>>,
}
