use crate::errors::MnemoResult;

/// Text → vector port.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> MnemoResult<Vec<f32>>;

    /// Embed a batch of texts, preserving order.
    fn embed_batch(&self, texts: &[String]) -> MnemoResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
