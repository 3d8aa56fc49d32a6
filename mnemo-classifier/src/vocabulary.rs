//! Immutable token sets injected into the classifier.

use std::collections::HashSet;

use mnemo_core::config::VocabularyConfig;

#[derive(Debug, Clone)]
pub struct Vocabulary {
    meaningful: HashSet<String>,
    policy: HashSet<String>,
    identity_keys: HashSet<String>,
    preference_keys: HashSet<String>,
}

fn lower_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.trim().to_lowercase()).collect()
}

impl Vocabulary {
    pub fn from_config(config: &VocabularyConfig) -> Self {
        Self {
            meaningful: lower_set(&config.meaningful_tokens),
            policy: lower_set(&config.policy_keywords),
            identity_keys: lower_set(&config.identity_keys),
            preference_keys: lower_set(&config.preference_keys),
        }
    }

    pub fn has_meaningful_token(&self, text: &str) -> bool {
        tokenize(text).iter().any(|t| self.meaningful.contains(t))
    }

    pub fn has_policy_keyword(&self, text: &str) -> bool {
        tokenize(text).iter().any(|t| self.policy.contains(t))
    }

    pub fn is_identity_key(&self, key: &str) -> bool {
        self.identity_keys.contains(key)
    }

    /// A bare preference key (`preference`, `like`) naming the whole list.
    pub fn is_preference_list_key(&self, key: &str) -> bool {
        self.preference_keys.contains(key)
    }

    /// A preference key, or a compound key led by one (`favorite_drink`).
    pub fn is_preference_key(&self, key: &str) -> bool {
        self.preference_keys.contains(key)
            || key
                .split('_')
                .next()
                .is_some_and(|head| self.preference_keys.contains(head))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_config(&VocabularyConfig::default())
    }
}

/// Lowercase alphanumeric words. Contractions split at the apostrophe, so
/// "what's" yields "what" and "s".
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("What's the Policy, re: coffee-breaks?"),
            vec!["what", "s", "the", "policy", "re", "coffee", "breaks"]
        );
        assert_eq!(tokenize("Who\u{2019}s on call"), vec!["who", "s", "on", "call"]);
    }

    #[test]
    fn contractions_reach_meaningful_tokens() {
        let v = Vocabulary::default();
        assert!(v.has_meaningful_token("what's"));
        assert!(v.has_meaningful_token("How\u{2019}s it going"));
        assert!(v.has_policy_keyword("what's the company's policy"));
    }

    #[test]
    fn keyword_lookups() {
        let v = Vocabulary::default();
        assert!(v.has_policy_keyword("Is this against company rules?"));
        assert!(!v.has_policy_keyword("What is my name?"));
        assert!(v.has_meaningful_token("how"));
        assert!(v.is_identity_key("name"));
        assert!(v.is_preference_key("preference"));
        assert!(v.is_preference_key("favorite_drink"));
        assert!(v.is_preference_list_key("like"));
        assert!(!v.is_preference_list_key("favorite_drink"));
        assert!(!v.is_identity_key("preference"));
    }
}
