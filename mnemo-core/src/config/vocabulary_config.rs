use serde::{Deserialize, Serialize};

/// Fixed vocabularies consumed by the classifier.
///
/// Kept as data so the classifier can be tested against alternative
/// vocabularies without touching orchestration code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Tokens that mark a question as meaningful (question words, modals, domain nouns).
    pub meaningful_tokens: Vec<String>,
    /// Tokens that mark a question as being about company policy.
    pub policy_keywords: Vec<String>,
    /// Fact keys that describe who the user is.
    pub identity_keys: Vec<String>,
    /// Fact keys that describe what the user likes.
    pub preference_keys: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            meaningful_tokens: owned(&[
                // question words
                "what", "who", "whom", "whose", "where", "when", "why", "how", "which",
                // modals and auxiliaries
                "can", "could", "should", "would", "will", "shall", "may", "might", "must",
                "do", "does", "did", "is", "are", "am", "was", "were", "have", "has",
                // domain nouns
                "policy", "policies", "company", "rule", "rules", "break", "breaks", "name",
                "like", "prefer", "employee", "employees", "office", "leave", "work", "hours",
                "coffee", "document", "documents", "remember", "hello", "hi", "thanks",
            ]),
            policy_keywords: owned(&[
                "policy", "policies", "company", "rule", "rules", "break", "breaks",
                "allowed", "permitted", "prohibited", "guideline", "guidelines", "handbook",
                "procedure", "procedures", "regulation", "regulations", "compliance",
            ]),
            identity_keys: owned(&["name", "full_name", "nickname", "preferred_name"]),
            preference_keys: owned(&[
                "preference", "preferences", "like", "likes", "favorite", "favourite",
            ]),
        }
    }
}
