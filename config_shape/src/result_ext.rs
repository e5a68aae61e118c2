//! Extension for mapping foreign errors to `ShapeResult` concisely.
//!
//! Reduces repetitive `.map_err(ShapeError::from)` at call sites that convert
//! `serde_json` or `toml` results.
//!
//! # Examples
//!
//! ```
//! use config_shape::{ShapeResult, ShapeResultExt};
//!
//! fn parse() -> ShapeResult<serde_json::Value> {
//!     serde_json::from_str("{\"a\": 1}").into_shape()
//! }
//! # assert!(parse().is_ok());
//! ```

use crate::{ShapeError, ShapeResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<ShapeError>`
/// into a `ShapeResult<T>`.
pub trait ShapeResultExt<T, E> {
    /// Convert `Result<T, E>` into `ShapeResult<T>` using `Into<ShapeError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into [`ShapeError`].
    fn into_shape(self) -> ShapeResult<T>;
}

impl<T, E> ShapeResultExt<T, E> for Result<T, E>
where
    E: Into<ShapeError>,
{
    fn into_shape(self) -> ShapeResult<T> {
        self.map_err(Into::into)
    }
}
