//! Property tests: the garbage filter and JSON extraction are total.

use proptest::prelude::*;

use mnemo_classifier::extractor::parse_fact;
use mnemo_classifier::garbage::is_garbage;
use mnemo_classifier::Vocabulary;

proptest! {
    #[test]
    fn prop_parse_fact_never_panics(text in ".{0,200}") {
        let _ = parse_fact(&text);
    }

    #[test]
    fn prop_short_input_is_garbage(text in ".{0,3}") {
        prop_assert!(is_garbage(&text, &Vocabulary::default()));
    }

    #[test]
    fn prop_policy_question_with_noise_is_not_garbage(noise in "[0-9!?.]{0,6}") {
        let question = format!("What is the policy {noise}");
        prop_assert!(!is_garbage(&question, &Vocabulary::default()));
    }

    #[test]
    fn prop_extracted_keys_are_normalised(key in "[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,2}") {
        let json = format!(r#"{{"key":"{key}","value":"v","intent":"introducing"}}"#);
        let fact = parse_fact(&json).unwrap();
        prop_assert!(!fact.key.contains(' '));
        prop_assert_eq!(fact.key.clone(), fact.key.to_lowercase());
    }
}
