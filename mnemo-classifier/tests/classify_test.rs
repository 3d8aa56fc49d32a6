//! Classifier end to end with a scripted completion port.

use std::sync::Arc;

use mnemo_classifier::Classifier;
use mnemo_core::config::VocabularyConfig;
use mnemo_core::models::{FactIntent, HighLevelIntent};
use test_fixtures::{FailingCompletion, ScriptedCompletion};

fn classifier(completion: Arc<ScriptedCompletion>) -> Classifier {
    Classifier::new(&VocabularyConfig::default(), completion).unwrap()
}

#[test]
fn fast_path_skips_extraction_call() {
    let completion = Arc::new(ScriptedCompletion::new());
    let c = classifier(Arc::clone(&completion));
    let result = c.classify("My name is Aditia").unwrap();

    let fact = result.fact_candidate.unwrap();
    assert_eq!(fact.key, "name");
    assert_eq!(fact.intent, FactIntent::Introducing);
    assert!(completion.prompt_calls().is_empty());
}

#[test]
fn merged_query_via_extraction() {
    let completion = Arc::new(
        ScriptedCompletion::new()
            .with_extractions([r#"{"key":"name","value":"","intent":"asking"}"#]),
    );
    let c = classifier(Arc::clone(&completion));
    let result = c
        .classify("Given my name, is having coffee every hour against policy?")
        .unwrap();

    assert_eq!(result.intent, HighLevelIntent::MergedMemoryPolicyQuery);
    assert!(result.has_policy_keyword);
    assert_eq!(completion.prompt_calls().len(), 1);
}

#[test]
fn malformed_extraction_is_no_fact() {
    let completion = Arc::new(ScriptedCompletion::new().with_extractions(["I think {maybe"]));
    let c = classifier(completion);
    let result = c.classify("Tell me about onboarding").unwrap();
    assert!(result.fact_candidate.is_none());
    assert_eq!(result.intent, HighLevelIntent::Unknown);
}

#[test]
fn policy_question_without_fact() {
    let c = classifier(Arc::new(ScriptedCompletion::new()));
    let result = c.classify("What does the policy say about coffee?").unwrap();
    assert!(result.fact_candidate.is_none());
    assert_eq!(result.intent, HighLevelIntent::PurePolicyQuery);
}

#[test]
fn asking_questions_go_through_extraction() {
    let completion = Arc::new(
        ScriptedCompletion::new()
            .with_extractions([r#"{"key":"name","value":"","intent":"asking"}"#]),
    );
    let c = classifier(Arc::clone(&completion));
    let result = c.classify("What is my name?").unwrap();
    assert_eq!(result.intent, HighLevelIntent::PureMemoryQuery);
    assert_eq!(result.fact_candidate.unwrap().key, "name");
    assert_eq!(completion.prompt_calls(), vec!["What is my name?".to_string()]);
}

#[test]
fn compound_asking_question_keeps_the_extracted_key() {
    let completion = Arc::new(
        ScriptedCompletion::new()
            .with_extractions([r#"{"key":"name","value":"","intent":"asking"}"#]),
    );
    let c = classifier(Arc::clone(&completion));
    let result = c
        .classify("What is my name and the coffee break policy?")
        .unwrap();

    assert_eq!(result.fact_candidate.unwrap().key, "name");
    assert_eq!(result.intent, HighLevelIntent::MergedMemoryPolicyQuery);
    assert_eq!(completion.prompt_calls().len(), 1);
}

#[test]
fn direct_personal_question_is_pure_memory() {
    let c = classifier(Arc::new(ScriptedCompletion::new()));
    let result = c.classify("Do I like coffee?").unwrap();
    assert_eq!(result.intent, HighLevelIntent::PureMemoryQuery);
    assert!(result.is_direct_personal_question);
}

#[test]
fn extraction_transport_failure_propagates() {
    let c = Classifier::new(
        &VocabularyConfig::default(),
        Arc::new(FailingCompletion { status: 503 }),
    )
    .unwrap();
    let err = c.classify("Tell me about onboarding").unwrap_err();
    assert_eq!(err.upstream_status(), Some(503));
}

#[test]
fn custom_vocabulary_is_honoured() {
    let vocabulary = VocabularyConfig {
        policy_keywords: vec!["onboarding".to_string()],
        ..Default::default()
    };
    let c = Classifier::new(&vocabulary, Arc::new(ScriptedCompletion::new())).unwrap();
    let result = c.classify("Tell me about onboarding").unwrap();
    assert_eq!(result.intent, HighLevelIntent::PurePolicyQuery);
}
