//! Matcher behavior across every schema type

use crate::init_tracing;
use proptest::prelude::*;
use sift::{matches, FilterValue, MatchMode, Schema, Value};

fn check(schema: &Schema, value: Value, filter: impl Into<FilterValue>, mode: MatchMode) -> bool {
    init_tracing();
    matches(schema, &value, &filter.into(), mode).expect("well-typed inputs must not error")
}

#[test]
fn string_equality_ignores_case() {
    assert!(check(&Schema::String, "Hello".into(), "hello", MatchMode::Equals));
    assert!(check(&Schema::String, "ÉTÉ".into(), "été", MatchMode::Equals));
    assert!(!check(&Schema::String, "Hello".into(), "help", MatchMode::Equals));
}

#[test]
fn string_equality_uses_case_folding() {
    assert!(check(&Schema::String, "ΟΔΟΣ".into(), "οδος", MatchMode::Equals));
    assert!(check(&Schema::String, "ſ".into(), "S", MatchMode::Equals));
}

#[test]
fn string_substring_is_case_sensitive() {
    assert!(check(&Schema::String, "foobar".into(), "oba", MatchMode::Substring));
    assert!(!check(&Schema::String, "foobar".into(), "OBA", MatchMode::Substring));
    assert!(check(&Schema::String, "foobar".into(), "", MatchMode::Substring));
}

#[test]
fn string_regex_searches_anywhere() {
    let pattern = FilterValue::pattern("b[a-z]r").unwrap();
    assert!(check(&Schema::String, "foobar".into(), pattern.clone(), MatchMode::Regex));
    assert!(!check(&Schema::String, "FOOBAR".into(), pattern, MatchMode::Regex));
}

#[test]
fn string_regex_without_pattern_is_mismatch() {
    let err = matches(
        &Schema::String,
        &Value::from("abc"),
        &FilterValue::from("a"),
        MatchMode::Regex,
    )
    .unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn string_relational_modes_fall_back_to_equality() {
    assert!(check(&Schema::String, "abc".into(), "ABC", MatchMode::LessThan));
    assert!(!check(&Schema::String, "abc".into(), "abd", MatchMode::LessThan));
}

#[test]
fn bool_ignores_mode() {
    for mode in MatchMode::ALL {
        assert!(check(&Schema::Bool, true.into(), true, mode));
        assert!(!check(&Schema::Bool, true.into(), false, mode));
    }
}

#[test]
fn int_relational_modes() {
    assert!(check(&Schema::Int, Value::Int(5), 10i64, MatchMode::LessThan));
    assert!(!check(&Schema::Int, Value::Int(10), 10i64, MatchMode::LessThan));
    assert!(check(&Schema::Int, Value::Int(10), 10i64, MatchMode::LessThanOrEqual));
    assert!(check(&Schema::Int, Value::Int(11), 10i64, MatchMode::GreaterThan));
    assert!(check(&Schema::Int, Value::Int(10), 10i64, MatchMode::GreaterThanOrEqual));
    assert!(check(&Schema::Int, Value::Int(0), 1i64, MatchMode::LessThan));
    assert!(check(&Schema::Int, Value::Int(7), 7i64, MatchMode::Substring));
}

#[test]
fn float_equality_within_epsilon() {
    assert!(check(&Schema::Float, 1.0000001.into(), 1.0, MatchMode::Equals));
    assert!(!check(&Schema::Float, 1.00001.into(), 1.0, MatchMode::Equals));
}

#[test]
fn float_zero_is_absent_for_relational_modes() {
    assert!(!check(&Schema::Float, 0.0.into(), 5.0, MatchMode::LessThan));
    assert!(!check(&Schema::Float, 0.0.into(), 5.0, MatchMode::LessThanOrEqual));
    assert!(!check(&Schema::Float, 0.0.into(), -5.0, MatchMode::GreaterThan));
    assert!(!check(&Schema::Float, 0.0.into(), 0.0, MatchMode::GreaterThanOrEqual));
    assert!(check(&Schema::Float, 0.0.into(), 0.0, MatchMode::Equals));
}

#[test]
fn float_or_equal_uses_tolerance() {
    assert!(check(&Schema::Float, 2.0000001.into(), 2.0, MatchMode::LessThanOrEqual));
    assert!(check(&Schema::Float, 1.9999999.into(), 2.0, MatchMode::GreaterThanOrEqual));
    assert!(!check(&Schema::Float, 2.0000001.into(), 2.0, MatchMode::LessThan));
}

#[test]
fn collections_match_any_element() {
    let tags = Schema::set(Schema::String);
    let value = Value::Set(vec!["prod".into(), "eu".into()]);
    assert!(check(&tags, value.clone(), "EU", MatchMode::Equals));
    assert!(!check(&tags, value, "us", MatchMode::Equals));

    let ports = Schema::list(Schema::Int);
    let value = Value::List(vec![Value::Int(80), Value::Int(443)]);
    assert!(check(&ports, value.clone(), 100i64, MatchMode::GreaterThan));
    assert!(!check(&ports, value, 1000i64, MatchMode::GreaterThan));
}

#[test]
fn empty_collection_never_matches() {
    for mode in MatchMode::ALL {
        assert!(!check(&Schema::list(Schema::Int), Value::List(vec![]), 1i64, mode));
    }
}

#[test]
fn nested_collections_recurse() {
    let schema = Schema::list(Schema::set(Schema::Int));
    let value = Value::List(vec![
        Value::Set(vec![Value::Int(1)]),
        Value::Set(vec![Value::Int(2), Value::Int(3)]),
    ]);
    assert!(check(&schema, value.clone(), 3i64, MatchMode::Equals));
    assert!(!check(&schema, value, 4i64, MatchMode::Equals));
}

#[test]
fn shape_mismatch_is_reported() {
    let err = matches(
        &Schema::Int,
        &Value::from("7"),
        &FilterValue::from(7i64),
        MatchMode::Equals,
    )
    .unwrap_err();
    assert!(err.is_type_mismatch());

    let err = matches(
        &Schema::Int,
        &Value::Int(7),
        &FilterValue::from(7.0),
        MatchMode::Equals,
    )
    .unwrap_err();
    assert!(err.is_type_mismatch());
}

proptest! {
    #[test]
    fn int_modes_agree_with_operators(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(check(&Schema::Int, a.into(), b, MatchMode::LessThan), a < b);
        prop_assert_eq!(check(&Schema::Int, a.into(), b, MatchMode::GreaterThanOrEqual), a >= b);
        prop_assert_eq!(check(&Schema::Int, a.into(), b, MatchMode::Equals), a == b);
    }

    #[test]
    fn list_match_is_any_of_elements(items in prop::collection::vec(-50i64..50, 0..8), probe in -50i64..50) {
        let value = Value::List(items.iter().copied().map(Value::Int).collect());
        let expected = items.iter().any(|&i| i > probe);
        prop_assert_eq!(
            check(&Schema::list(Schema::Int), value, probe, MatchMode::GreaterThan),
            expected
        );
    }
}
