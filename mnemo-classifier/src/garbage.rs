//! Non-meaningful input filter. Pure, no network.

use mnemo_core::constants::{GARBAGE_MAX_LETTERS, GARBAGE_MIN_TERMINAL_PUNCT, MIN_QUESTION_CHARS};

use crate::vocabulary::Vocabulary;

/// Whether a question should be rejected before classification.
///
/// Rejected when the trimmed text is empty or shorter than
/// [`MIN_QUESTION_CHARS`], or when it has no meaningful token while also
/// carrying a digit or repeated terminal punctuation and few letters.
pub fn is_garbage(question: &str, vocabulary: &Vocabulary) -> bool {
    let trimmed = question.trim();
    if trimmed.chars().count() < MIN_QUESTION_CHARS {
        return true;
    }
    if vocabulary.has_meaningful_token(trimmed) {
        return false;
    }

    let has_digit = trimmed.chars().any(|c| c.is_ascii_digit());
    let terminal_punct = trimmed
        .chars()
        .filter(|c| matches!(c, '?' | '!' | '.'))
        .count();
    let letters = trimmed.chars().filter(|c| c.is_alphabetic()).count();

    (has_digit || terminal_punct >= GARBAGE_MIN_TERMINAL_PUNCT) && letters < GARBAGE_MAX_LETTERS
}
