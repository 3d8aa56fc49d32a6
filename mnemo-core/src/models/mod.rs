pub mod chat;
pub mod chunk;
pub mod fact;
pub mod memory;
pub mod retrieval;
pub mod search;

pub use chat::{ChatRequest, ChatResponse, ChatTurn, MemoryMeta, ResponseMeta};
pub use chunk::{Chunk, Document, NewChunk, RetrievedChunk};
pub use fact::{FactCandidate, FactIntent, HighLevelIntent};
pub use memory::{Fact, Memory, MemoryCandidate, MemoryType, NewMemory, RankedMemory, Role, SavedMemory};
pub use retrieval::{RetrievalMeta, RetrievalResult};
pub use search::{SearchHit, SearchRequest, SearchResponse};
