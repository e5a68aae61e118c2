//! Builders turning JSON literals into configuration trees.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use test_helpers::builders::mapping;
//!
//! let fragment = mapping(json!({"a": 1}));
//! assert_eq!(fragment.len(), 1);
//! ```

use config_shape::{ConfigValue, Mapping};

/// Converts a JSON literal into a [`ConfigValue`].
#[must_use]
pub fn value(json: serde_json::Value) -> ConfigValue {
    ConfigValue::from(json)
}

/// Converts a JSON object literal into a [`Mapping`].
///
/// # Panics
///
/// Panics when `json` is not an object; fixtures are expected to be mappings.
#[must_use]
#[track_caller]
pub fn mapping(json: serde_json::Value) -> Mapping {
    match ConfigValue::from(json) {
        ConfigValue::Mapping(fragment) => fragment,
        other => panic!("fixture must be a JSON object, got {}", other.kind()),
    }
}

/// Converts several JSON object literals into mappings, preserving order.
///
/// # Panics
///
/// Panics when any literal is not an object.
#[must_use]
#[track_caller]
pub fn mappings<I>(literals: I) -> Vec<Mapping>
where
    I: IntoIterator<Item = serde_json::Value>,
{
    literals.into_iter().map(mapping).collect()
}
