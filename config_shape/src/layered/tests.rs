//! Unit tests for the layered mapping view.

use rstest::rstest;
use serde_json::json;

use super::LayeredMapping;
use crate::{ConfigValue, Mapping, ShapeError, merge};

fn mapping(value: serde_json::Value) -> Mapping {
    ConfigValue::from(value).into_mapping().unwrap_or_default()
}

#[test]
fn one_member() -> anyhow::Result<()> {
    let only = mapping(json!({"a": 1, "b": 2, "c": 3}));
    let view = LayeredMapping::new([&only]);
    assert_eq!(view.len(), 3);
    for key in ["a", "b", "c"] {
        assert!(view.contains_key(key));
    }
    assert_eq!(view.lookup("a")?, &ConfigValue::from(1));
    assert_eq!(view.lookup("b")?, &ConfigValue::from(2));
    assert_eq!(view.lookup("c")?, &ConfigValue::from(3));
    Ok(())
}

#[rstest]
#[case::disjoint(json!({"d": 1, "e": 2, "f": 3}), 6)]
#[case::overlapping(json!({"c": 1, "d": 2, "e": 3}), 5)]
#[case::identical_keys(json!({"a": 9, "b": 9, "c": 9}), 3)]
#[case::empty_second(json!({}), 3)]
fn len_counts_the_key_union(#[case] overlay: serde_json::Value, #[case] expected: usize) {
    let first = mapping(json!({"a": 1, "b": 2, "c": 3}));
    let second = mapping(overlay);
    assert_eq!(LayeredMapping::new([&first, &second]).len(), expected);
}

#[test]
fn later_layers_shadow_earlier_ones() -> anyhow::Result<()> {
    let first = mapping(json!({"a": 1, "b": 2, "c": 3}));
    let second = mapping(json!({"c": 1, "d": 2, "e": 3}));
    let view = LayeredMapping::new([&first, &second]);

    for key in ["a", "b", "c", "d", "e"] {
        assert!(view.contains_key(key), "missing {key}");
    }
    assert_eq!(view.lookup("a")?, &ConfigValue::from(1));
    assert_eq!(view.lookup("b")?, &ConfigValue::from(2));
    assert_eq!(view.lookup("c")?, &ConfigValue::from(1));
    assert_eq!(view.lookup("d")?, &ConfigValue::from(2));
    assert_eq!(view.lookup("e")?, &ConfigValue::from(3));
    Ok(())
}

#[test]
fn shadowing_does_not_merge_nested_mappings() {
    let first = mapping(json!({"models": {"materialized": "view", "enabled": true}}));
    let second = mapping(json!({"models": {"materialized": "table"}}));
    let view = LayeredMapping::new([&first, &second]);
    assert_eq!(
        view.get("models"),
        Some(&ConfigValue::from(json!({"materialized": "table"})))
    );
}

#[test]
fn missing_keys_are_reported() {
    let only = mapping(json!({"a": 1}));
    let view = LayeredMapping::new([&only]);
    assert!(!view.contains_key("z"));
    assert!(view.get("z").is_none());
    match view.lookup("z") {
        Err(ShapeError::KeyNotFound { key }) => assert_eq!(key, "z"),
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

#[test]
fn views_without_layers_are_empty() {
    let view = LayeredMapping::default();
    assert!(view.is_empty());
    assert_eq!(view.len(), 0);
    assert_eq!(view.keys().count(), 0);
    assert!(matches!(view.lookup("a"), Err(ShapeError::KeyNotFound { .. })));
}

#[test]
fn keys_are_reported_once_in_first_seen_order() {
    let first = mapping(json!({"b": 1, "a": 1}));
    let second = mapping(json!({"c": 1, "b": 2}));
    let view = LayeredMapping::new([&first, &second]);
    assert_eq!(view.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
}

#[test]
fn iter_yields_effective_values() {
    let first = mapping(json!({"a": 1, "b": 2}));
    let second = mapping(json!({"b": 3}));
    let view: LayeredMapping<'_> = [&first, &second].into_iter().collect();
    let pairs: Vec<(&str, &ConfigValue)> = view.iter().collect();
    assert_eq!(
        pairs,
        [("a", &ConfigValue::from(1)), ("b", &ConfigValue::from(3))]
    );
}

#[test]
fn to_mapping_matches_a_shallow_merge() {
    let first = mapping(json!({"a": {"x": 1}, "b": 2}));
    let second = mapping(json!({"a": {"y": 2}, "c": [1]}));
    let view = LayeredMapping::new([&first, &second]);
    assert_eq!(view.to_mapping(), merge([&first, &second]));
    assert_eq!(view.layers().len(), 2);
}
