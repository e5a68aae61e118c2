//! Deep-merge behaviour across ordered fragments.

use config_shape::{ConfigValue, Mapping, deep_merge};
use rstest::rstest;
use serde_json::json;
use test_helpers::builders::{mapping, mappings};

#[rstest]
#[case::one_key_into_empty(vec![json!({}), json!({"a": 1})], json!({"a": 1}))]
#[case::three_merges(vec![json!({}), json!({"b": 1}), json!({"a": 1})], json!({"a": 1, "b": 1}))]
fn simple_cases(#[case] fragments: Vec<serde_json::Value>, #[case] expected: serde_json::Value) {
    assert_eq!(deep_merge(&mappings(fragments)), mapping(expected));
}

#[test]
fn layered_sources_apply_in_order() {
    let fragments = mappings([
        json!({"timeout": 100, "cache": {"mode": "off"}}),
        json!({"timeout": 200}),
        json!({"cache": {"mode": "on"}}),
        json!({"timeout": 50}),
    ]);
    assert_eq!(
        deep_merge(&fragments),
        mapping(json!({"timeout": 50, "cache": {"mode": "on"}}))
    );
}

#[test]
fn every_key_of_every_fragment_survives() {
    let first = mapping(json!({"a": {"x": 1, "list": [1, 2]}, "only_first": true}));
    let second = mapping(json!({"a": {"y": 2, "list": [3]}, "only_second": null}));
    let merged = deep_merge([&first, &second]);

    for key in first.keys().chain(second.keys()) {
        assert!(merged.contains_key(key), "missing {key}");
    }
    let nested = merged.get("a").and_then(ConfigValue::as_mapping);
    let expected_nested = deep_merge([
        first.get("a").and_then(ConfigValue::as_mapping).unwrap_or(&Mapping::new()),
        second.get("a").and_then(ConfigValue::as_mapping).unwrap_or(&Mapping::new()),
    ]);
    assert_eq!(nested, Some(&expected_nested));
    assert_eq!(merged.get("only_second"), second.get("only_second"));
}

#[test]
fn mutating_the_result_leaves_the_input_alone() {
    let original = mapping(json!({"vars": {"env": "dev"}}));
    let mut merged = deep_merge([&original]);
    if let Some(ConfigValue::Mapping(vars)) = merged.get_mut("vars") {
        vars.insert("env".into(), ConfigValue::from("prod"));
    }
    assert_eq!(original, mapping(json!({"vars": {"env": "dev"}})));
    assert_ne!(merged, original);
}
