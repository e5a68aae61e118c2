//! Canonical documents shared by behavioural suites.

use serde_json::json;

use config_shape::ConfigValue;

/// Nested document mixing mappings, sequences and every scalar kind.
///
/// Strings that look numeric (`"990"`, `"89.9"`, `"90"`) sit next to real
/// numbers so coercing callbacks have something to do.
#[must_use]
pub fn nested_document() -> ConfigValue {
    ConfigValue::from(json!({
        "foo": {
            "bar": "hello",
            "baz": [1, 90.5, "990", "89.9"],
        },
        "nested": [
            {
                "test": "90",
                "other_test": null,
            },
            {
                "test": 400,
                "other_test": 4.7e9,
            },
        ],
    }))
}
