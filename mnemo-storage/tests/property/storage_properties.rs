//! Property tests: chat rows accumulate, fact upserts collapse to one row.

use proptest::prelude::*;

use mnemo_core::models::{MemoryType, NewMemory, Role};
use mnemo_core::traits::IMemoryStore;
use mnemo_storage::StorageEngine;

fn memory(content: &str, key: Option<&str>, memory_type: MemoryType) -> NewMemory {
    NewMemory {
        user_id: "prop-user".to_string(),
        role: Role::User,
        content: content.to_string(),
        embedding: vec![1.0, 0.5, 0.25],
        memory_key: key.map(str::to_string),
        memory_type,
        conversation_id: None,
    }
}

proptest! {
    #[test]
    fn prop_chat_saves_append(contents in prop::collection::vec("[a-zA-Z0-9 ]{1,40}", 1..20)) {
        let engine = StorageEngine::open_in_memory().unwrap();
        for c in &contents {
            engine.save(&memory(c, None, MemoryType::Chat)).unwrap();
        }
        prop_assert_eq!(
            engine.memory_count("prop-user", Some(MemoryType::Chat)).unwrap(),
            contents.len()
        );
    }

    #[test]
    fn prop_fact_upserts_keep_latest(values in prop::collection::vec("[a-zA-Z]{1,20}", 1..10)) {
        let engine = StorageEngine::open_in_memory().unwrap();
        for v in &values {
            engine.save(&memory(v, Some("name"), MemoryType::Fact)).unwrap();
        }
        prop_assert_eq!(engine.memory_count("prop-user", None).unwrap(), 1);
        let facts = engine.latest_facts("prop-user").unwrap();
        prop_assert_eq!(&facts[0].value, values.last().unwrap());
    }
}
