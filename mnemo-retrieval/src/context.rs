use mnemo_core::constants::CONTEXT_SEPARATOR;
use mnemo_core::models::RetrievedChunk;

/// Join chunk contents with the fixed separator. No chunks, no context.
pub fn build_context(chunks: &[RetrievedChunk]) -> String {
    chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}
