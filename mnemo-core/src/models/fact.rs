use serde::{Deserialize, Serialize};

/// What the user is doing with a fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactIntent {
    Introducing,
    Updating,
    Asking,
    Neutral,
}

impl FactIntent {
    /// Lenient parse of LLM output. Anything unrecognised is `Neutral`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "introducing" => Self::Introducing,
            "updating" => Self::Updating,
            "asking" => Self::Asking,
            _ => Self::Neutral,
        }
    }

    /// Introducing or updating: the fact should be written.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Introducing | Self::Updating)
    }
}

/// Structured fact extracted from one user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCandidate {
    /// Normalised key: lowercase, words joined by `_`.
    pub key: String,
    /// May be empty when the user is asking.
    pub value: String,
    pub intent: FactIntent,
}

impl FactCandidate {
    pub fn new(key: impl Into<String>, value: impl Into<String>, intent: FactIntent) -> Self {
        Self {
            key: normalize_key(&key.into()),
            value: value.into().trim().to_string(),
            intent,
        }
    }

    /// Key rendered for user-facing sentences (`full_name` → `full name`).
    pub fn display_key(&self) -> String {
        display_key(&self.key)
    }
}

/// Lowercase a fact key and join its words with `_`.
pub fn normalize_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Render a stored key for user-facing text.
pub fn display_key(key: &str) -> String {
    key.replace('_', " ")
}

/// Coarse routing category for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HighLevelIntent {
    PureMemoryQuery,
    PurePolicyQuery,
    MergedMemoryPolicyQuery,
    Unknown,
}

impl HighLevelIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PureMemoryQuery => "PURE_MEMORY_QUERY",
            Self::PurePolicyQuery => "PURE_POLICY_QUERY",
            Self::MergedMemoryPolicyQuery => "MERGED_MEMORY_POLICY_QUERY",
            Self::Unknown => "UNKNOWN",
        }
    }
}
