//! Conversions from [`toml::Value`].

use toml::Value;

use super::{ConfigValue, Scalar};

/// Datetimes become string scalars in their TOML rendering.
impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Scalar(Scalar::String(text)),
            Value::Integer(number) => Self::Scalar(Scalar::Integer(number)),
            Value::Float(number) => Self::Scalar(Scalar::Float(number)),
            Value::Boolean(flag) => Self::Scalar(Scalar::Bool(flag)),
            Value::Datetime(stamp) => Self::Scalar(Scalar::String(stamp.to_string())),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Table(table) => Self::Mapping(
                table
                    .into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}
