//! Primary error enum for structural operations.

use thiserror::Error;

use crate::keypath::Keypath;

/// Result alias used throughout the crate.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Errors raised while mapping, converting or querying configuration data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShapeError {
    /// A value is not a mapping, sequence or scalar.
    #[error(
        "unsupported value at '{keypath}': expected a mapping, sequence or scalar, got {type_name}"
    )]
    ConfigShape {
        /// Location of the offending value.
        keypath: Keypath,
        /// Type name of the offending value.
        type_name: &'static str,
    },

    /// A float with no JSON representation.
    #[error("non-finite number {value} at '{keypath}' cannot be represented in JSON")]
    NonFiniteFloat {
        /// Location of the offending value.
        keypath: Keypath,
        /// The NaN or infinite value.
        value: f64,
    },

    /// No layer of a layered mapping holds the requested key.
    #[error("key '{key}' not found in any layer")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// Conversion to or from JSON failed.
    #[error("failed to convert configuration value: {0}")]
    Json(#[from] Box<serde_json::Error>),

    /// A document in another format could not be parsed.
    #[error("failed to parse {format} configuration: {source}")]
    Parse {
        /// Name of the document format.
        format: &'static str,
        /// Underlying error reported by the parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
