//! Coarse intent resolution.

use mnemo_core::models::{FactCandidate, FactIntent, HighLevelIntent};

/// First matching rule wins:
/// 1. asking fact: merged when a policy keyword is present, else pure memory;
/// 2. no fact and a direct personal question: pure memory;
/// 3. a policy keyword: pure policy;
/// 4. otherwise unknown.
pub fn detect_high_level_intent(
    fact: Option<&FactCandidate>,
    has_policy_keyword: bool,
    is_direct_personal_question: bool,
) -> HighLevelIntent {
    match fact {
        Some(f) if f.intent == FactIntent::Asking => {
            if has_policy_keyword {
                HighLevelIntent::MergedMemoryPolicyQuery
            } else {
                HighLevelIntent::PureMemoryQuery
            }
        }
        None if is_direct_personal_question => HighLevelIntent::PureMemoryQuery,
        _ if has_policy_keyword => HighLevelIntent::PurePolicyQuery,
        _ => HighLevelIntent::Unknown,
    }
}
