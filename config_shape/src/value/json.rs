//! Conversions between [`ConfigValue`] and [`serde_json::Value`].

use serde_json::{Map, Number, Value};

use super::{ConfigValue, Scalar};
use crate::error::ShapeError;
use crate::keypath::Keypath;

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::null(),
            Value::Bool(flag) => Self::Scalar(Scalar::Bool(flag)),
            Value::Number(number) => Self::Scalar(scalar_from_number(&number)),
            Value::String(text) => Self::Scalar(Scalar::String(text)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}

/// Integers that do not fit `i64` degrade to floats.
fn scalar_from_number(number: &Number) -> Scalar {
    number.as_i64().map_or_else(
        || number.as_f64().map_or(Scalar::Null, Scalar::Float),
        Scalar::Integer,
    )
}

/// Lossy for NaN and infinite floats, which become `null`; converting a whole
/// [`ConfigValue`] rejects them instead.
impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Null => Self::Null,
            Scalar::Bool(flag) => Self::Bool(flag),
            Scalar::Integer(number) => Self::from(number),
            Scalar::Float(number) => Self::from(number),
            Scalar::String(text) => Self::String(text),
        }
    }
}

/// Fails with [`ShapeError::ConfigShape`] when the tree holds an opaque value
/// and with [`ShapeError::NonFiniteFloat`] on NaN or infinite floats.
impl TryFrom<ConfigValue> for Value {
    type Error = ShapeError;

    fn try_from(value: ConfigValue) -> Result<Self, Self::Error> {
        let mut keypath = Keypath::root();
        to_json(value, &mut keypath)
    }
}

fn to_json(value: ConfigValue, keypath: &mut Keypath) -> Result<Value, ShapeError> {
    match value {
        ConfigValue::Scalar(Scalar::Float(number)) => Number::from_f64(number)
            .map(Value::Number)
            .ok_or_else(|| ShapeError::non_finite_float(keypath.clone(), number)),
        ConfigValue::Scalar(scalar) => Ok(Value::from(scalar)),
        ConfigValue::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                keypath.push(index);
                let converted = to_json(item, keypath);
                keypath.pop();
                out.push(converted?);
            }
            Ok(Value::Array(out))
        }
        ConfigValue::Mapping(mapping) => {
            let mut out = Map::with_capacity(mapping.len());
            for (key, item) in mapping {
                keypath.push(key.as_str());
                let converted = to_json(item, keypath);
                keypath.pop();
                out.insert(key, converted?);
            }
            Ok(Value::Object(out))
        }
        ConfigValue::Opaque(opaque) => Err(ShapeError::config_shape(
            keypath.clone(),
            opaque.type_name(),
        )),
    }
}
