//! v002: user_memories.
//!
//! `UNIQUE(user_id, memory_key)` backs the fact upsert. Chat rows carry a
//! NULL key, and SQLite treats NULLs as distinct, so they never collide.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS user_memories (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id      TEXT NOT NULL,
    role         TEXT NOT NULL CHECK (role IN ('user', 'assistant')),
    content      TEXT NOT NULL,
    embedding    BLOB NOT NULL,
    dimensions   INTEGER NOT NULL,
    memory_key   TEXT,
    memory_type  TEXT NOT NULL DEFAULT 'chat' CHECK (memory_type IN ('fact', 'chat')),
    updated_at   TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    UNIQUE(user_id, memory_key)
);

CREATE INDEX IF NOT EXISTS idx_user_memories_user ON user_memories(user_id, memory_type);
CREATE INDEX IF NOT EXISTS idx_user_memories_updated ON user_memories(user_id, updated_at);
";
