//! The classifier facade used by the orchestrator.

use std::sync::Arc;

use tracing::debug;

use mnemo_core::config::VocabularyConfig;
use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{FactCandidate, HighLevelIntent};
use mnemo_core::traits::ICompletionProvider;

use crate::extractor::extract_fact;
use crate::fast_paths::FastPaths;
use crate::garbage::is_garbage;
use crate::intent::detect_high_level_intent;
use crate::vocabulary::Vocabulary;

/// Output of [`Classifier::classify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub fact_candidate: Option<FactCandidate>,
    pub intent: HighLevelIntent,
    pub has_policy_keyword: bool,
    pub is_direct_personal_question: bool,
}

pub struct Classifier {
    vocabulary: Vocabulary,
    fast_paths: FastPaths,
    completion: Arc<dyn ICompletionProvider>,
}

impl Classifier {
    pub fn new(
        vocabulary: &VocabularyConfig,
        completion: Arc<dyn ICompletionProvider>,
    ) -> MnemoResult<Self> {
        Ok(Self {
            vocabulary: Vocabulary::from_config(vocabulary),
            fast_paths: FastPaths::new()?,
            completion,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn fast_paths(&self) -> &FastPaths {
        &self.fast_paths
    }

    pub fn is_garbage(&self, question: &str) -> bool {
        is_garbage(question, &self.vocabulary)
    }

    /// Name/like introductions, without any model call.
    pub fn fast_path_fact(&self, question: &str) -> Option<FactCandidate> {
        self.fast_paths.introduced_fact(question)
    }

    pub fn is_canned_recall(&self, question: &str) -> bool {
        self.fast_paths.is_canned_recall(question)
    }

    /// Classify a non-garbage question.
    ///
    /// Name and like introductions skip the model; everything else gets
    /// exactly one extraction call.
    pub fn classify(&self, question: &str) -> MnemoResult<Classification> {
        let fact_candidate = match self.fast_paths.introduced_fact(question) {
            Some(fact) => Some(fact),
            None => extract_fact(self.completion.as_ref(), question)?,
        };

        let has_policy_keyword = self.vocabulary.has_policy_keyword(question);
        let is_direct_personal_question = self.fast_paths.is_direct_personal_question(question);
        let intent = detect_high_level_intent(
            fact_candidate.as_ref(),
            has_policy_keyword,
            is_direct_personal_question,
        );

        debug!(
            intent = intent.as_str(),
            fact_key = fact_candidate.as_ref().map(|f| f.key.as_str()).unwrap_or(""),
            has_policy_keyword,
            is_direct_personal_question,
            "classified question"
        );

        Ok(Classification {
            fact_candidate,
            intent,
            has_policy_keyword,
            is_direct_personal_question,
        })
    }
}
