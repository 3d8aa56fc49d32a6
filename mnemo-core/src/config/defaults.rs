// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "mnemo.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_CONVERSATION_SCOPING: bool = true;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "api";
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;

// --- Completion ---
pub const DEFAULT_COMPLETION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_COMPLETION_TEMPERATURE: f32 = 0.0;

// --- Shared HTTP ---
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_SEARCH_LIMIT: usize = 5;
pub const DEFAULT_MAX_SEARCH_LIMIT: usize = 50;

// --- Memory ---
pub const DEFAULT_SIMILAR_TOP_K: usize = 5;

// --- Retry ---
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAYS_MS: [u64; 3] = [0, 200, 500];
pub const DEFAULT_RETRYABLE_STATUSES: [u16; 4] = [429, 500, 502, 503];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
