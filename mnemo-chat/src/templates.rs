//! User-facing answer templates.

use mnemo_core::models::fact::display_key;

pub const EMPTY_QUESTION: &str = "Please type a question so I can help you.";

pub const GARBAGE_CLARIFICATION: &str =
    "Sorry, I couldn't understand that. Could you rephrase your question?";

pub const UNKNOWN_CLARIFICATION: &str =
    "I'm not sure what you're asking. Could you give me a bit more detail?";

pub const NO_MEMORY: &str = "I don't have that information about you yet.";

pub const POLICY_FALLBACK: &str =
    "The policy documents don't give a definitive answer on that, so please confirm with HR.";

pub fn greeting(name: &str) -> String {
    format!("Hello, {name}! How can I assist you today?")
}

pub fn like_acknowledgment(value: &str) -> String {
    format!("Got it! I'll remember that you like {value}.")
}

pub fn fact_acknowledgment(key: &str, value: &str) -> String {
    format!("Got it! I'll remember that your {} is {value}.", display_key(key))
}

pub fn fact_sentence(key: &str, value: &str) -> String {
    format!("Your {} is {value}.", display_key(key))
}

pub fn preferences_sentence(values: &[&str]) -> String {
    format!("Your preferences include {}.", values.join(", "))
}

/// Completion question for the policy half of a merged query.
pub fn policy_only_question(question: &str) -> String {
    format!(
        "Answer only the company-policy part of this question and ignore any personal details: {question}"
    )
}

const DONT_KNOW_MARKERS: [&str; 4] = [
    "i don't know",
    "i do not know",
    "don't know from the document",
    "not enough information",
];

/// Whether a completion answer is empty or a "don't know" disclaimer.
///
/// Phrase matching on model output; a reworded disclaimer slips through.
pub fn is_dont_know(text: &str) -> bool {
    let normalized = text
        .trim()
        .replace(['\u{2018}', '\u{2019}'], "'")
        .to_lowercase();
    normalized.is_empty() || DONT_KNOW_MARKERS.iter().any(|m| normalized.contains(m))
}
