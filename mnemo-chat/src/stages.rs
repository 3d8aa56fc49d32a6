//! Ordered short-circuit stages.
//!
//! Each stage is a predicate plus a handler. The engine walks a table and
//! runs the handler of the first stage whose predicate holds; a table
//! with no match hands the turn to the next step.

use mnemo_classifier::Classification;
use mnemo_core::errors::{MnemoError, MnemoResult};
use mnemo_core::models::{ChatRequest, FactCandidate};
use mnemo_memory::engine::SaveMemory;

use crate::engine::ChatEngine;
use crate::recall::non_identity_values;
use crate::reply::{Persist, Reply};
use crate::templates;

/// One request as seen by the stages.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub request: &'a ChatRequest,
    /// The trimmed question.
    pub question: &'a str,
    /// Present once classification has run.
    pub classification: Option<&'a Classification>,
}

impl<'a> Turn<'a> {
    pub fn new(request: &'a ChatRequest, question: &'a str) -> Self {
        Self {
            request,
            question,
            classification: None,
        }
    }

    pub fn classified(self, classification: &'a Classification) -> Self {
        Self {
            classification: Some(classification),
            ..self
        }
    }

    fn written_fact(&self) -> Option<&'a FactCandidate> {
        self.classification
            .and_then(|c| c.fact_candidate.as_ref())
            .filter(|f| f.intent.is_write() && !f.value.is_empty())
    }
}

pub type Predicate = fn(&ChatEngine, &Turn<'_>) -> bool;
pub type Handler = fn(&ChatEngine, &Turn<'_>) -> MnemoResult<Reply>;

pub struct Stage {
    pub name: &'static str,
    pub applies: Predicate,
    pub handle: Handler,
}

/// Stages checked before any model call.
pub const PRE_CLASSIFICATION: &[Stage] = &[
    Stage {
        name: "empty_question",
        applies: is_empty_question,
        handle: answer_empty_question,
    },
    Stage {
        name: "garbage",
        applies: is_garbage,
        handle: answer_garbage,
    },
    Stage {
        name: "fast_path_fact",
        applies: has_fast_path_fact,
        handle: write_fast_path_fact,
    },
    Stage {
        name: "canned_recall",
        applies: is_canned_recall,
        handle: answer_canned_recall,
    },
];

/// Stages checked once the question has been classified.
pub const POST_CLASSIFICATION: &[Stage] = &[
    Stage {
        name: "identity_fact_write",
        applies: is_identity_fact_write,
        handle: write_classified_fact,
    },
    Stage {
        name: "fact_write",
        applies: is_other_fact_write,
        handle: write_classified_fact,
    },
];

/// First stage in `stages` whose predicate holds.
pub fn first_match<'s>(stages: &'s [Stage], engine: &ChatEngine, turn: &Turn<'_>) -> Option<&'s Stage> {
    stages.iter().find(|stage| (stage.applies)(engine, turn))
}

fn is_empty_question(_: &ChatEngine, turn: &Turn<'_>) -> bool {
    turn.question.is_empty()
}

fn answer_empty_question(_: &ChatEngine, _: &Turn<'_>) -> MnemoResult<Reply> {
    Ok(Reply::new(templates::EMPTY_QUESTION, Persist::Nothing))
}

fn is_garbage(engine: &ChatEngine, turn: &Turn<'_>) -> bool {
    engine.classifier().is_garbage(turn.question)
}

fn answer_garbage(_: &ChatEngine, _: &Turn<'_>) -> MnemoResult<Reply> {
    Ok(Reply::new(templates::GARBAGE_CLARIFICATION, Persist::AnswerOnly))
}

fn has_fast_path_fact(engine: &ChatEngine, turn: &Turn<'_>) -> bool {
    engine.classifier().fast_path_fact(turn.question).is_some()
}

fn write_fast_path_fact(engine: &ChatEngine, turn: &Turn<'_>) -> MnemoResult<Reply> {
    match engine.classifier().fast_path_fact(turn.question) {
        Some(fact) => write_fact(engine, turn, &fact),
        None => Err(MnemoError::Internal {
            reason: "fast path stage ran without a fact".to_string(),
        }),
    }
}

fn is_canned_recall(engine: &ChatEngine, turn: &Turn<'_>) -> bool {
    engine.classifier().is_canned_recall(turn.question)
}

fn answer_canned_recall(engine: &ChatEngine, turn: &Turn<'_>) -> MnemoResult<Reply> {
    let facts = engine.memory().latest_facts_by_key(&turn.request.user_id)?;
    let values = non_identity_values(&facts, engine.classifier().vocabulary());
    let reply = if values.is_empty() {
        Reply::new(templates::NO_MEMORY, Persist::QuestionAndAnswer)
    } else {
        Reply::new(templates::preferences_sentence(&values), Persist::QuestionAndAnswer)
            .with_memory_used(true)
    };
    Ok(reply)
}

fn is_identity_fact_write(engine: &ChatEngine, turn: &Turn<'_>) -> bool {
    turn.written_fact()
        .is_some_and(|f| engine.classifier().vocabulary().is_identity_key(&f.key))
}

fn is_other_fact_write(engine: &ChatEngine, turn: &Turn<'_>) -> bool {
    turn.written_fact()
        .is_some_and(|f| !engine.classifier().vocabulary().is_identity_key(&f.key))
}

fn write_classified_fact(engine: &ChatEngine, turn: &Turn<'_>) -> MnemoResult<Reply> {
    match turn.written_fact() {
        Some(fact) => write_fact(engine, turn, fact),
        None => Err(MnemoError::Internal {
            reason: "fact stage ran without a written fact".to_string(),
        }),
    }
}

/// Upsert the fact and acknowledge it with a template.
fn write_fact(engine: &ChatEngine, turn: &Turn<'_>, fact: &FactCandidate) -> MnemoResult<Reply> {
    engine
        .memory()
        .save(SaveMemory::fact(&turn.request.user_id, &fact.key, &fact.value))?;

    let vocabulary = engine.classifier().vocabulary();
    let answer = if vocabulary.is_identity_key(&fact.key) {
        templates::greeting(&fact.value)
    } else if vocabulary.is_preference_key(&fact.key) {
        templates::like_acknowledgment(&fact.value)
    } else {
        templates::fact_acknowledgment(&fact.key, &fact.value)
    };
    Ok(Reply::new(answer, Persist::AnswerOnly).with_memory_used(true))
}
