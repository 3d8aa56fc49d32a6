//! Intent pipelines, reached when no stage short-circuits.

use tracing::debug;

use mnemo_core::errors::MnemoResult;
use mnemo_core::models::{HighLevelIntent, RetrievalResult};
use mnemo_core::traits::CompletionRequest;
use mnemo_retrieval::build_context;

use crate::engine::ChatEngine;
use crate::recall::{memory_sentence, memory_text};
use crate::reply::{Persist, Reply};
use crate::stages::Turn;
use crate::templates;

pub fn dispatch(engine: &ChatEngine, turn: &Turn<'_>, intent: HighLevelIntent) -> MnemoResult<Reply> {
    debug!(intent = intent.as_str(), "dispatching pipeline");
    match intent {
        HighLevelIntent::PureMemoryQuery => pure_memory(engine, turn),
        HighLevelIntent::MergedMemoryPolicyQuery => merged(engine, turn),
        HighLevelIntent::PurePolicyQuery => {
            let rag = engine.retrieve_documents(turn.question)?;
            pure_policy(engine, turn, &rag)
        }
        HighLevelIntent::Unknown => unknown(engine, turn),
    }
}

/// Key of the fact the user asked about, if the classifier found one.
fn asked_key<'a>(turn: &Turn<'a>) -> Option<&'a str> {
    turn.classification
        .and_then(|c| c.fact_candidate.as_ref())
        .map(|f| f.key.as_str())
        .filter(|k| !k.is_empty())
}

fn recalled_sentence(engine: &ChatEngine, turn: &Turn<'_>) -> MnemoResult<Option<String>> {
    let facts = engine.memory().latest_facts_by_key(&turn.request.user_id)?;
    Ok(memory_sentence(
        &facts,
        asked_key(turn),
        turn.question,
        engine.classifier().vocabulary(),
    ))
}

fn pure_memory(engine: &ChatEngine, turn: &Turn<'_>) -> MnemoResult<Reply> {
    let reply = match recalled_sentence(engine, turn)? {
        Some(sentence) => Reply::new(sentence, Persist::QuestionAndAnswer).with_memory_used(true),
        None => Reply::new(templates::NO_MEMORY, Persist::QuestionAndAnswer),
    };
    Ok(reply)
}

/// Memory sentence followed by the policy sentence.
///
/// The policy half never carries a disclaimer next to a recalled fact.
fn merged(engine: &ChatEngine, turn: &Turn<'_>) -> MnemoResult<Reply> {
    let sentence = recalled_sentence(engine, turn)?;
    let rag = engine.retrieve_documents(turn.question)?;
    let policy = policy_answer(engine, turn, templates::policy_only_question(turn.question), &rag)?;

    let memory_used = sentence.is_some();
    let memory_part = sentence.unwrap_or_else(|| templates::NO_MEMORY.to_string());
    Ok(
        Reply::new(format!("{memory_part} {policy}"), Persist::QuestionAndAnswer)
            .with_context(&rag)
            .with_memory_used(memory_used),
    )
}

fn pure_policy(engine: &ChatEngine, turn: &Turn<'_>, rag: &RetrievalResult) -> MnemoResult<Reply> {
    let policy = policy_answer(engine, turn, turn.question.to_string(), rag)?;
    Ok(Reply::new(policy, Persist::QuestionAndAnswer).with_context(rag))
}

/// Completion over the document context, with disclaimers replaced.
fn policy_answer(
    engine: &ChatEngine,
    turn: &Turn<'_>,
    question: String,
    rag: &RetrievalResult,
) -> MnemoResult<String> {
    let answer = engine.completion().complete(&CompletionRequest {
        question,
        context: build_context(&rag.final_chunks),
        history: turn.request.history.clone(),
        memory_text: String::new(),
    })?;
    if templates::is_dont_know(&answer) {
        debug!("completion gave no policy answer, using fallback");
        return Ok(templates::POLICY_FALLBACK.to_string());
    }
    Ok(answer.trim().to_string())
}

/// Probe the corpus first; any chunk upgrades the turn to a policy query.
fn unknown(engine: &ChatEngine, turn: &Turn<'_>) -> MnemoResult<Reply> {
    let embedding = engine.embed(turn.question)?;
    let rag = engine.retrieve_with_embedding(&embedding)?;
    if !rag.is_empty() {
        debug!(chunks = rag.final_chunks.len(), "probe found context, answering as policy query");
        return pure_policy(engine, turn, &rag);
    }

    let user_id = &turn.request.user_id;
    let facts = engine.memory().latest_facts_by_key(user_id)?;
    let recalled = engine.memory().retrieve(
        user_id,
        &embedding,
        engine.settings().similar_top_k,
        None,
        turn.request.conversation_id.as_deref(),
    )?;
    if facts.is_empty() && recalled.is_empty() {
        return Ok(Reply::new(templates::UNKNOWN_CLARIFICATION, Persist::QuestionAndAnswer));
    }

    let answer = engine.completion().complete(&CompletionRequest {
        question: turn.question.to_string(),
        context: String::new(),
        history: turn.request.history.clone(),
        memory_text: memory_text(&facts, &recalled),
    })?;
    let answer = answer.trim();
    let answer = if answer.is_empty() {
        templates::UNKNOWN_CLARIFICATION
    } else {
        answer
    };
    Ok(Reply::new(answer, Persist::QuestionAndAnswer).with_memory_used(true))
}
