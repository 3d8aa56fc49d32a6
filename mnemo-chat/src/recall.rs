//! Templated answers built from stored facts.

use mnemo_classifier::vocabulary::tokenize;
use mnemo_classifier::Vocabulary;
use mnemo_core::models::Fact;

use crate::templates::{fact_sentence, preferences_sentence};

/// Values of the user's preference facts.
fn preference_values<'a>(facts: &'a [Fact], vocabulary: &Vocabulary) -> Vec<&'a str> {
    facts
        .iter()
        .filter(|f| vocabulary.is_preference_key(&f.key))
        .map(|f| f.value.as_str())
        .collect()
}

/// Values of every fact that does not describe who the user is.
pub fn non_identity_values<'a>(facts: &'a [Fact], vocabulary: &Vocabulary) -> Vec<&'a str> {
    facts
        .iter()
        .filter(|f| !vocabulary.is_identity_key(&f.key))
        .map(|f| f.value.as_str())
        .collect()
}

/// Sentence about the user's facts relevant to the question.
///
/// With a key hint the fact stored under that exact key answers, except a
/// bare preference key (`like`), which answers with the preference list.
/// Without one, every fact whose key words all appear in the question is
/// used, plus the preference list when the question talks about liking.
pub fn memory_sentence(
    facts: &[Fact],
    key_hint: Option<&str>,
    question: &str,
    vocabulary: &Vocabulary,
) -> Option<String> {
    if let Some(key) = key_hint {
        if vocabulary.is_preference_list_key(key) {
            let values = preference_values(facts, vocabulary);
            return (!values.is_empty()).then(|| preferences_sentence(&values));
        }
        return facts
            .iter()
            .find(|f| f.key == key)
            .map(|f| fact_sentence(&f.key, &f.value));
    }

    let tokens = tokenize(question);
    let mut sentences: Vec<String> = facts
        .iter()
        .filter(|f| !vocabulary.is_preference_key(&f.key))
        .filter(|f| f.key.split('_').all(|part| tokens.iter().any(|t| t == part)))
        .map(|f| fact_sentence(&f.key, &f.value))
        .collect();

    let asks_about_liking = tokens.iter().any(|t| {
        vocabulary.is_preference_key(t) || matches!(t.as_str(), "love" | "prefer" | "enjoy")
    });
    if asks_about_liking {
        let values = preference_values(facts, vocabulary);
        if !values.is_empty() {
            sentences.push(preferences_sentence(&values));
        }
    }

    (!sentences.is_empty()).then(|| sentences.join(" "))
}

/// Plain-text memory block handed to the completion port.
pub fn memory_text(facts: &[Fact], recalled: &[String]) -> String {
    let mut out = String::new();
    if !facts.is_empty() {
        out.push_str("Known facts about the user:\n");
        for fact in facts {
            out.push_str(&format!("- {}: {}\n", fact.key, fact.value));
        }
    }
    if !recalled.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("Related earlier messages:\n");
        for line in recalled {
            out.push_str(&format!("- {line}\n"));
        }
    }
    out.trim_end().to_string()
}
