//! The closed value model shared by every structural operation.
//!
//! Configuration data is parsed into [`ConfigValue`] trees before it is merged,
//! mapped or layered. The enum distinguishes the three recognised shapes
//! (mapping, sequence, scalar) from [`ConfigValue::Opaque`], which carries host
//! objects that are not structured configuration data and are rejected by
//! [`crate::map_render`].
//!
//! # Examples
//!
//! ```rust
//! use config_shape::{ConfigValue, Mapping, Scalar};
//!
//! let mut mapping = Mapping::new();
//! mapping.insert("port".into(), ConfigValue::from(8080));
//! mapping.insert("hosts".into(), ConfigValue::from(vec![ConfigValue::from("a")]));
//!
//! let value = ConfigValue::from(mapping);
//! assert!(value.is_mapping());
//! assert_eq!(
//!     value.as_mapping().and_then(|m| m.get("port")),
//!     Some(&ConfigValue::Scalar(Scalar::Integer(8080)))
//! );
//! ```

#[cfg(feature = "toml")]
mod from_toml;
mod json;
mod opaque;
mod scalar;
mod serde_impl;

pub use opaque::OpaqueValue;
pub use scalar::Scalar;

use indexmap::IndexMap;

/// Insertion-ordered mapping fragment.
///
/// Equality ignores key order; iteration follows insertion order.
pub type Mapping = IndexMap<String, ConfigValue>;

/// A node in a configuration tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// Leaf value with no nested structure.
    Scalar(Scalar),
    /// Ordered sequence of values.
    Sequence(Vec<Self>),
    /// Keyed association of values.
    Mapping(Mapping),
    /// Host object that is not structured configuration data.
    Opaque(OpaqueValue),
}

/// Coarse classification of a [`ConfigValue`], used in diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool,
    /// Signed integer.
    Integer,
    /// Floating point number.
    Float,
    /// UTF-8 string.
    String,
    /// Ordered sequence.
    Sequence,
    /// Keyed mapping.
    Mapping,
    /// Unsupported host object.
    Opaque,
}

impl ValueKind {
    /// Human-readable name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Opaque => "opaque",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigValue {
    /// The `null` scalar.
    #[must_use]
    pub const fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// Wrap an arbitrary host object as an opaque value.
    #[must_use]
    pub fn opaque<T>(value: T) -> Self
    where
        T: std::any::Any + Send + Sync,
    {
        Self::Opaque(OpaqueValue::new(value))
    }

    /// Returns the kind of this node.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(scalar) => scalar.kind(),
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Returns `true` when the value is a mapping.
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Returns `true` when the value is a scalar.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Borrow the inner mapping, if any.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Mutably borrow the inner mapping, if any.
    #[must_use]
    pub const fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Borrow the inner sequence, if any.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the inner scalar, if any.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Consume the value, returning the mapping it holds.
    #[must_use]
    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Scalar> for ConfigValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Mapping> for ConfigValue {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<Vec<Self>> for ConfigValue {
    fn from(value: Vec<Self>) -> Self {
        Self::Sequence(value)
    }
}

impl From<OpaqueValue> for ConfigValue {
    fn from(value: OpaqueValue) -> Self {
        Self::Opaque(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Integer(value))
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Integer(i64::from(value)))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}

impl<T> From<Option<T>> for ConfigValue
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}

impl FromIterator<Self> for ConfigValue {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

impl<K> FromIterator<(K, Self)> for ConfigValue
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Self)>>(iter: I) -> Self {
        Self::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests;
