// crates/accord-contract/tests/proptest_content.rs
// ============================================================================
// Module: Content Property-Based Tests
// Description: Property tests for canonical text determinism.
// Purpose: Detect panics and instability across wide value ranges.
// ============================================================================

//! Property-based tests for canonical body serialization invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use accord_contract::content::canonical_text;
use accord_contract::content::resolve_content_type;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use serde_json::Value;

fn json_value_strategy(max_depth: u32) -> impl Strategy<Value = Value> {
    // Integers stay inside the IEEE-754 exact range required by RFC 8785.
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-(1_i64 << 53) .. (1_i64 << 53)).prop_map(|v| Value::Number(v.into())),
        ".*".prop_map(Value::String),
    ];

    leaf.prop_recursive(max_depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0 .. 4).prop_map(Value::Array),
            prop::collection::btree_map(".{1,6}", inner, 0 .. 4).prop_map(|map| {
                let mut object = serde_json::Map::new();
                for (key, value) in map {
                    object.insert(key, value);
                }
                Value::Object(object)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn canonical_text_is_deterministic(value in json_value_strategy(3)) {
        let first = canonical_text(&value).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let second = canonical_text(&value).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn canonical_text_is_ascii(value in json_value_strategy(3)) {
        let text = canonical_text(&value).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!(text.is_ascii());
    }

    #[test]
    fn canonical_text_of_composite_roots_reparses_to_the_same_canonical_form(
        value in json_value_strategy(3)
    ) {
        prop_assume!(value.is_object() || value.is_array());
        let text = canonical_text(&value).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let reparsed: Value = serde_json::from_str(&text)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let again = canonical_text(&reparsed).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(text, again);
    }

    #[test]
    fn content_type_resolution_never_panics(value in json_value_strategy(3)) {
        let _ = resolve_content_type(&[], Some(&value));
    }
}
