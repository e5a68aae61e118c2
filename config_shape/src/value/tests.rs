//! Unit tests for the value model and its conversions.

use rstest::rstest;
use serde_json::json;

use super::{ConfigValue, Mapping, OpaqueValue, Scalar, ValueKind};
use crate::ShapeError;

#[rstest]
#[case(json!(null), ValueKind::Null)]
#[case(json!(true), ValueKind::Bool)]
#[case(json!(7), ValueKind::Integer)]
#[case(json!(4.7e9), ValueKind::Float)]
#[case(json!("990"), ValueKind::String)]
#[case(json!([1, 2]), ValueKind::Sequence)]
#[case(json!({"a": 1}), ValueKind::Mapping)]
fn json_values_map_onto_kinds(#[case] input: serde_json::Value, #[case] expected: ValueKind) {
    assert_eq!(ConfigValue::from(input).kind(), expected);
}

#[test]
fn oversized_unsigned_integers_degrade_to_floats() {
    let value = ConfigValue::from(json!(u64::MAX));
    assert_eq!(value.kind(), ValueKind::Float);
}

#[test]
fn json_round_trip_preserves_structure() -> anyhow::Result<()> {
    let input = json!({
        "foo": {"bar": "hello", "baz": [1, 90.5, "990", "89.9"]},
        "nested": [{"test": "90", "other_test": null}],
    });
    let value = ConfigValue::from(input.clone());
    assert_eq!(serde_json::Value::try_from(value)?, input);
    Ok(())
}

#[test]
fn opaque_values_do_not_convert_to_json() {
    let value = ConfigValue::from_iter([(
        "outer",
        ConfigValue::from_iter([("inner", ConfigValue::opaque(1.5_f32))]),
    )]);
    match serde_json::Value::try_from(value) {
        Err(ShapeError::ConfigShape { keypath, .. }) => {
            assert_eq!(keypath.to_string(), "outer.inner");
        }
        other => panic!("expected ConfigShape, got {other:?}"),
    }
}

#[test]
fn nan_does_not_convert_to_json() {
    let value = ConfigValue::from_iter([("ratio", ConfigValue::from(f64::NAN))]);
    let err = serde_json::Value::try_from(value).err();
    assert!(matches!(err, Some(ShapeError::NonFiniteFloat { .. })));
    assert_eq!(
        err.as_ref().and_then(ShapeError::keypath).map(ToString::to_string),
        Some("ratio".to_owned())
    );
}

#[test]
fn serde_round_trip_through_json_text() -> anyhow::Result<()> {
    let text = r#"{"b":[1,2.5,"x",null,true],"a":{"c":{}}}"#;
    let value: ConfigValue = serde_json::from_str(text)?;
    assert_eq!(serde_json::to_string(&value)?, text);
    Ok(())
}

#[test]
fn serialising_opaque_values_fails() {
    let value = ConfigValue::Sequence(vec![ConfigValue::opaque("socket")]);
    let err = serde_json::to_string(&value).err();
    let message = err.map(|e| e.to_string()).unwrap_or_default();
    assert!(message.contains("opaque value of type &str"), "{message}");
}

#[test]
fn opaque_equality_is_identity() {
    let first = OpaqueValue::new(String::from("pool"));
    let shared = first.clone();
    let other = OpaqueValue::new(String::from("pool"));
    assert_eq!(first, shared);
    assert_ne!(first, other);
    assert_eq!(first.downcast_ref::<String>().map(String::as_str), Some("pool"));
    assert!(first.downcast_ref::<u8>().is_none());
    assert_eq!(format!("{first:?}"), "OpaqueValue(\"alloc::string::String\")");
}

#[test]
fn mapping_equality_ignores_key_order() {
    let left: Mapping = [("a", 1), ("b", 2)]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), ConfigValue::from(v)))
        .collect();
    let right: Mapping = [("b", 2), ("a", 1)]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), ConfigValue::from(v)))
        .collect();
    assert_eq!(left, right);
}

#[rstest]
#[case(Scalar::Null, "null")]
#[case(Scalar::Bool(false), "false")]
#[case(Scalar::Integer(-3), "-3")]
#[case(Scalar::Float(90.5), "90.5")]
#[case(Scalar::from("text"), "text")]
fn scalars_display_as_rendered_text(#[case] scalar: Scalar, #[case] expected: &str) {
    assert_eq!(scalar.to_string(), expected);
}

#[test]
fn options_map_to_null_or_value() {
    assert_eq!(ConfigValue::from(None::<i64>), ConfigValue::null());
    assert_eq!(ConfigValue::from(Some("x")), ConfigValue::from("x"));
}

#[test]
fn accessors_match_variants() {
    let value = ConfigValue::from(json!({"list": [1], "n": 2}));
    let mapping = value.as_mapping();
    assert!(mapping.is_some());
    let list = mapping.and_then(|m| m.get("list"));
    assert_eq!(list.and_then(ConfigValue::as_sequence).map(<[_]>::len), Some(1));
    let n = mapping.and_then(|m| m.get("n"));
    assert_eq!(n.and_then(ConfigValue::as_scalar).and_then(Scalar::as_i64), Some(2));
    assert!(value.as_scalar().is_none());
    assert!(ConfigValue::default().as_scalar().is_some_and(Scalar::is_null));
}

#[cfg(feature = "toml")]
#[test]
fn toml_datetimes_become_strings() -> anyhow::Result<()> {
    let parsed: toml::Value = toml::from_str("when = 1979-05-27T07:32:00Z\n")?;
    let value = ConfigValue::from(parsed);
    let when = value.as_mapping().and_then(|m| m.get("when"));
    assert_eq!(when, Some(&ConfigValue::from("1979-05-27T07:32:00Z")));
    Ok(())
}
