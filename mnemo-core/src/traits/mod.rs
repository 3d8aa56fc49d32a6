pub mod completion;
pub mod embedding;
pub mod memory_store;
pub mod retrieval_store;

pub use completion::{CompletionRequest, ICompletionProvider};
pub use embedding::IEmbeddingProvider;
pub use memory_store::{IMemoryStore, MemoryQuery};
pub use retrieval_store::IRetrievalStore;
