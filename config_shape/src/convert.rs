//! Typed bridges between Rust values, text documents and [`ConfigValue`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::result_ext::ShapeResultExt;
use crate::{ConfigValue, ShapeResult};

/// Serialise `value` into a configuration tree.
///
/// # Errors
///
/// Returns [`crate::ShapeError::Json`] when `value` cannot be serialised.
///
/// # Examples
///
/// ```rust
/// use config_shape::convert::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct App { port: u16 }
///
/// let value = to_value(&App { port: 8080 })?;
/// assert!(value.is_mapping());
/// # Ok::<_, config_shape::ShapeError>(())
/// ```
pub fn to_value<T: Serialize>(value: &T) -> ShapeResult<ConfigValue> {
    serde_json::to_value(value)
        .map(ConfigValue::from)
        .into_shape()
}

/// Deserialise a configuration tree into `T`.
///
/// # Errors
///
/// Returns [`crate::ShapeError::ConfigShape`] when the tree holds an opaque
/// value, [`crate::ShapeError::NonFiniteFloat`] when it holds a NaN or
/// infinite float, and [`crate::ShapeError::Json`] when deserialisation fails.
///
/// # Examples
///
/// ```rust
/// use config_shape::convert::{from_json_str, from_value};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct App { port: u16 }
///
/// let tree = from_json_str(r#"{"port": 8080}"#)?;
/// let app: App = from_value(tree)?;
/// assert_eq!(app, App { port: 8080 });
/// # Ok::<_, config_shape::ShapeError>(())
/// ```
pub fn from_value<T: DeserializeOwned>(value: ConfigValue) -> ShapeResult<T> {
    let json = serde_json::Value::try_from(value)?;
    serde_json::from_value(json).into_shape()
}

/// Parse a JSON document into a configuration tree, preserving key order.
///
/// # Errors
///
/// Returns [`crate::ShapeError::Json`] when the document is malformed.
pub fn from_json_str(input: &str) -> ShapeResult<ConfigValue> {
    serde_json::from_str::<serde_json::Value>(input)
        .map(ConfigValue::from)
        .into_shape()
}

/// Parse a TOML document into a configuration tree.
///
/// # Errors
///
/// Returns [`crate::ShapeError::Parse`] when the document is malformed.
#[cfg(feature = "toml")]
pub fn from_toml_str(input: &str) -> ShapeResult<ConfigValue> {
    toml::from_str::<toml::Value>(input)
        .map(ConfigValue::from)
        .into_shape()
}
