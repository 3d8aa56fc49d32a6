//! v003: optional conversation scoping column on user_memories.

pub const MIGRATION_SQL: &str = "
ALTER TABLE user_memories ADD COLUMN conversation_id TEXT;

CREATE INDEX IF NOT EXISTS idx_user_memories_conversation
    ON user_memories(user_id, conversation_id);
";
