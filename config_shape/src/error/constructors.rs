//! Constructors for `ShapeError`.

use crate::keypath::Keypath;

use super::ShapeError;

impl ShapeError {
    /// Construct a shape error for the value found at `keypath`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_shape::{Keypath, ShapeError};
    /// let err = ShapeError::config_shape(Keypath::root().join("foo"), "Widget");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "unsupported value at 'foo': expected a mapping, sequence or scalar, got Widget"
    /// );
    /// ```
    #[must_use]
    pub const fn config_shape(keypath: Keypath, type_name: &'static str) -> Self {
        Self::ConfigShape { keypath, type_name }
    }

    /// Construct a conversion failure for a NaN or infinite float found at
    /// `keypath`.
    #[must_use]
    pub const fn non_finite_float(keypath: Keypath, value: f64) -> Self {
        Self::NonFiniteFloat { keypath, value }
    }

    /// Construct a lookup failure for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_shape::ShapeError;
    /// let err = ShapeError::key_not_found("port");
    /// assert!(matches!(err, ShapeError::KeyNotFound { .. }));
    /// ```
    #[must_use]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Returns the keypath of a shape or conversion error.
    #[must_use]
    pub const fn keypath(&self) -> Option<&Keypath> {
        match self {
            Self::ConfigShape { keypath, .. } | Self::NonFiniteFloat { keypath, .. } => {
                Some(keypath)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ShapeError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(Box::new(source))
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for ShapeError {
    fn from(source: toml::de::Error) -> Self {
        Self::Parse {
            format: "TOML",
            source: Box::new(source),
        }
    }
}
