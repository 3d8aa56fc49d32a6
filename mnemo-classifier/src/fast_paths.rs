//! Deterministic regex paths that bypass the LLM extractor.

use regex::Regex;

use mnemo_core::errors::{MnemoError, MnemoResult};
use mnemo_core::models::{FactCandidate, FactIntent};

/// Compiled patterns. Build once and share.
#[derive(Debug, Clone)]
pub struct FastPaths {
    name_intro: Regex,
    like_intro: Regex,
    canned_recall: Regex,
    direct_personal: Regex,
}

fn compile(pattern: &str) -> MnemoResult<Regex> {
    Regex::new(pattern).map_err(|e| MnemoError::Internal {
        reason: format!("invalid fast-path pattern: {e}"),
    })
}

/// Strip trailing sentence punctuation and surrounding quotes from a value.
fn clean_value(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(['.', '!', ',', ';'])
        .trim_matches(['"', '\''])
        .trim()
        .to_string()
}

impl FastPaths {
    pub fn new() -> MnemoResult<Self> {
        Ok(Self {
            name_intro: compile(r"(?i)^\s*my\s+name\s+is\s+(.+?)\s*[.!]*\s*$")?,
            like_intro: compile(r"(?i)^\s*i\s+(?:now\s+)?(?:like|love|prefer)\s+(.+?)\s*[.!]*\s*$")?,
            canned_recall: compile(
                r"(?i)^\s*what\s+(?:do|things\s+do)\s+i\s+(?:like|love|prefer)\s*\??\s*$",
            )?,
            direct_personal: compile(
                r"(?i)\b(?:do|did)\s+i\s+(?:own|have|like|prefer|remember|know)\b|\bam\s+i\b",
            )?,
        })
    }

    /// "my name is X" or "I (now) like X". Questions never match.
    pub fn introduced_fact(&self, question: &str) -> Option<FactCandidate> {
        let trimmed = question.trim();
        if trimmed.ends_with('?') {
            return None;
        }
        if let Some(caps) = self.name_intro.captures(trimmed) {
            let value = clean_value(caps.get(1)?.as_str());
            return (!value.is_empty())
                .then(|| FactCandidate::new("name", value, FactIntent::Introducing));
        }
        if let Some(caps) = self.like_intro.captures(trimmed) {
            let value = clean_value(caps.get(1)?.as_str());
            return (!value.is_empty())
                .then(|| FactCandidate::new("preference", value, FactIntent::Introducing));
        }
        None
    }

    /// "what do I like?"
    pub fn is_canned_recall(&self, question: &str) -> bool {
        self.canned_recall.is_match(question)
    }

    /// "do I own/have/like/prefer/remember/know …" or "am I …".
    pub fn is_direct_personal_question(&self, question: &str) -> bool {
        self.direct_personal.is_match(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> FastPaths {
        FastPaths::new().unwrap()
    }

    #[test]
    fn name_intro() {
        let fact = paths().introduced_fact("My name is Aditia").unwrap();
        assert_eq!(fact.key, "name");
        assert_eq!(fact.value, "Aditia");
        assert_eq!(fact.intent, FactIntent::Introducing);

        let fact = paths().introduced_fact("  my name is Budi Santoso!  ").unwrap();
        assert_eq!(fact.value, "Budi Santoso");
    }

    #[test]
    fn like_intro_with_now() {
        let fact = paths().introduced_fact("I now like green tea.").unwrap();
        assert_eq!(fact.key, "preference");
        assert_eq!(fact.value, "green tea");

        let fact = paths().introduced_fact("I like coffee").unwrap();
        assert_eq!(fact.value, "coffee");
    }

    #[test]
    fn questions_are_not_introductions() {
        assert!(paths().introduced_fact("My name is what?").is_none());
        assert!(paths().introduced_fact("Do I like coffee?").is_none());
        assert!(paths().introduced_fact("What is the policy on coffee").is_none());
    }

    #[test]
    fn canned_recall() {
        assert!(paths().is_canned_recall("What do I like?"));
        assert!(paths().is_canned_recall("what do i like"));
        assert!(!paths().is_canned_recall("What do I like about the policy?"));
    }

    #[test]
    fn direct_personal_questions() {
        let p = paths();
        assert!(p.is_direct_personal_question("Do I have any pending leave?"));
        assert!(p.is_direct_personal_question("Am I allowed to work remotely?"));
        assert!(p.is_direct_personal_question("did I remember to submit it"));
        assert!(!p.is_direct_personal_question("Does the company allow pets?"));
    }
}
