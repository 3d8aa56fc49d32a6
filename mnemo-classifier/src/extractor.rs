//! LLM fact extraction with tolerant JSON parsing.

use serde::Deserialize;
use tracing::debug;

use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{FactCandidate, FactIntent};
use mnemo_core::traits::ICompletionProvider;

/// Fixed extraction instruction.
pub const EXTRACTION_INSTRUCTION: &str = "Extract at most one personal fact about the user from the message.\n\
Respond with strict JSON only: {\"key\": string, \"value\": string, \"intent\": \"introducing\" | \"updating\" | \"asking\" | \"neutral\"}.\n\
Use a short snake_case key such as \"name\" or \"preference\".\n\
Use intent \"asking\" with an empty value when the user asks about their own fact.\n\
If the message contains no personal fact, respond with null.";

#[derive(Debug, Deserialize)]
struct RawFact {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    value: Option<serde_json::Value>,
    #[serde(default)]
    intent: Option<String>,
}

/// Ask the model for a fact. Transport errors propagate; unusable output is `None`.
pub fn extract_fact(
    completion: &dyn ICompletionProvider,
    question: &str,
) -> MnemoResult<Option<FactCandidate>> {
    let raw = completion.prompt(EXTRACTION_INSTRUCTION, question)?;
    let fact = parse_fact(&raw);
    debug!(
        extracted = fact.is_some(),
        key = fact.as_ref().map(|f| f.key.as_str()).unwrap_or(""),
        "fact extraction"
    );
    Ok(fact)
}

/// Parse the first JSON object in `text`, ignoring any leading prose and
/// anything after the object.
pub fn parse_fact(text: &str) -> Option<FactCandidate> {
    let start = text.find('{')?;
    let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<RawFact>();
    let raw = stream.next()?.ok()?;

    let key = raw.key?;
    if key.trim().is_empty() {
        return None;
    }
    let value = match raw.value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    let intent = raw
        .intent
        .as_deref()
        .map(FactIntent::parse)
        .unwrap_or(FactIntent::Neutral);
    Some(FactCandidate::new(key, value, intent))
}
