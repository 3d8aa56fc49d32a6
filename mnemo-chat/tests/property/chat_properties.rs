//! Property tests for orchestrator invariants.

#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;

use common::{Harness, HANDBOOK};
use mnemo_chat::templates;
use mnemo_core::models::{ChatRequest, ChatTurn};
use test_fixtures::ScriptedCompletion;

fn arb_completion_output() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("I don't know from the document.".to_string()),
        Just("Sorry, I DON\u{2019}T KNOW.".to_string()),
        Just("There is not enough information to answer.".to_string()),
        "[A-Za-z ,.]{1,60}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_blank_question_echoes_history(
        blank in "[ \t\n]{0,8}",
        turns in prop::collection::vec("[a-z ]{1,20}", 0..4),
    ) {
        let h = Harness::new(ScriptedCompletion::new());
        let history: Vec<ChatTurn> = turns.into_iter().map(|t| ChatTurn::user(t)).collect();
        let response = h
            .engine
            .handle_chat(&ChatRequest::new("u1", blank).with_history(history.clone()))
            .unwrap();
        prop_assert_eq!(response.answer.as_str(), templates::EMPTY_QUESTION);
        prop_assert_eq!(response.history, history);
        prop_assert_eq!(h.chat_rows("u1"), 0);
    }

    #[test]
    fn prop_merged_answer_never_carries_a_disclaimer(output in arb_completion_output()) {
        let h = Harness::new(
            ScriptedCompletion::new()
                .with_extractions([r#"{"key": "name", "value": "", "intent": "asking"}"#])
                .with_answers([output]),
        );
        h.seed_fact("u1", "name", "Aditia");
        h.seed_chunks(&HANDBOOK);
        let response = h
            .engine
            .handle_chat(&ChatRequest::new("u1", "Given my name, is coffee every hour against policy?"))
            .unwrap();
        prop_assert!(response.answer.starts_with("Your name is Aditia. "));
        prop_assert!(!templates::is_dont_know(&response.answer));
    }

    #[test]
    fn prop_answered_turns_extend_history_by_one_exchange(question in "[A-Za-z ?]{1,40}") {
        let h = Harness::new(ScriptedCompletion::new());
        let response = h.engine.handle_chat(&ChatRequest::new("u1", question.clone())).unwrap();
        let expected = if question.trim().is_empty() { 0 } else { 2 };
        prop_assert_eq!(response.history.len(), expected);
        if expected == 2 {
            prop_assert_eq!(response.history[0].content.as_str(), question.trim());
            prop_assert_eq!(response.history[1].content.as_str(), response.answer.as_str());
        }
    }
}
