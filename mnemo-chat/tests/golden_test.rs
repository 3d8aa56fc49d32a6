//! Replays the golden chat scenarios under test-fixtures/golden/chat.

mod common;

use std::collections::BTreeMap;

use serde::Deserialize;

use common::Harness;
use mnemo_core::models::ChatRequest;
use test_fixtures::{list_fixtures, load_fixture, ScriptedCompletion};

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    #[serde(default)]
    facts: BTreeMap<String, String>,
    #[serde(default)]
    chunks: Vec<String>,
    #[serde(default)]
    extractions: Vec<String>,
    #[serde(default)]
    answers: Vec<String>,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    request: ChatRequest,
    expect: Expect,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Expect {
    answer: Option<String>,
    answer_prefix: Option<String>,
    answer_excludes: Option<String>,
    context_used: Option<Vec<String>>,
    #[serde(default)]
    context_non_empty: bool,
    memory_used: Option<bool>,
    history_len: Option<usize>,
    facts: Option<BTreeMap<String, String>>,
    chat_rows: Option<usize>,
    complete_calls: Option<usize>,
    prompt_calls: Option<usize>,
}

fn run_scenario(scenario: &Scenario) {
    let completion = ScriptedCompletion::new()
        .with_extractions(scenario.extractions.iter().cloned())
        .with_answers(scenario.answers.iter().cloned());
    let harness = Harness::new(completion);

    let user_id = &scenario.steps[0].request.user_id;
    for (key, value) in &scenario.facts {
        harness.seed_fact(user_id, key, value);
    }
    if !scenario.chunks.is_empty() {
        let chunks: Vec<&str> = scenario.chunks.iter().map(String::as_str).collect();
        harness.seed_chunks(&chunks);
    }

    for (i, step) in scenario.steps.iter().enumerate() {
        let ctx = format!("{} step {}", scenario.name, i);
        let response = harness.engine.handle_chat(&step.request).unwrap();
        let expect = &step.expect;

        if let Some(answer) = &expect.answer {
            assert_eq!(&response.answer, answer, "{ctx}: answer");
        }
        if let Some(prefix) = &expect.answer_prefix {
            assert!(response.answer.starts_with(prefix.as_str()), "{ctx}: prefix");
        }
        if let Some(excluded) = &expect.answer_excludes {
            assert!(!response.answer.contains(excluded.as_str()), "{ctx}: excluded text");
        }
        if let Some(context) = &expect.context_used {
            assert_eq!(&response.context_used, context, "{ctx}: contextUsed");
        }
        if expect.context_non_empty {
            assert!(!response.context_used.is_empty(), "{ctx}: contextUsed empty");
        }
        if let Some(memory_used) = expect.memory_used {
            assert_eq!(response.memory_used, memory_used, "{ctx}: memoryUsed");
        }
        if let Some(len) = expect.history_len {
            assert_eq!(response.history.len(), len, "{ctx}: history");
        }
        if let Some(facts) = &expect.facts {
            let stored: BTreeMap<String, String> = harness
                .engine
                .memory()
                .latest_facts_by_key(&step.request.user_id)
                .unwrap()
                .into_iter()
                .map(|f| (f.key, f.value))
                .collect();
            assert_eq!(&stored, facts, "{ctx}: facts");
            assert_eq!(response.meta.memory.facts_count, facts.len(), "{ctx}: factsCount");
        }
        if let Some(rows) = expect.chat_rows {
            assert_eq!(harness.chat_rows(&step.request.user_id), rows, "{ctx}: chat rows");
        }
        if let Some(calls) = expect.complete_calls {
            assert_eq!(harness.completion.complete_calls().len(), calls, "{ctx}: complete calls");
        }
        if let Some(calls) = expect.prompt_calls {
            assert_eq!(harness.completion.prompt_calls().len(), calls, "{ctx}: prompt calls");
        }
    }
}

#[test]
fn golden_chat_scenarios() {
    let files = list_fixtures("golden/chat");
    assert!(!files.is_empty(), "no golden chat scenarios found");
    for file in files {
        let name = file.file_name().unwrap().to_string_lossy().to_string();
        let scenario: Scenario = load_fixture(&format!("golden/chat/{name}"));
        run_scenario(&scenario);
    }
}
