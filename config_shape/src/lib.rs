//! Structural utilities for nested configuration data.
//!
//! Configuration fragments are parsed into [`ConfigValue`] trees and then
//! combined or transformed with the operations in this crate:
//!
//! - [`deep_merge`] recursively merges mapping fragments, later fragments
//!   winning. Sequences are replaced, never concatenated.
//! - [`map_render`] rebuilds a tree with every scalar passed through a
//!   callback that also receives the scalar's [`Keypath`].
//! - [`LayeredMapping`] is a borrowed, read-only, last-wins view over several
//!   fragments.
//! - [`humanize_execution_time`] renders elapsed seconds as a fixed phrase.
//!
//! All operations are pure and synchronous. Events are emitted through
//! `tracing`; installing a subscriber is left to the application.
//!
//! # Examples
//!
//! ```rust
//! use config_shape::{deep_merge, from_json_str, map_render, ConfigValue, LayeredMapping, Scalar};
//!
//! let project = from_json_str(r#"{"models": {"materialized": "view", "tags": ["a"]}}"#)?
//!     .into_mapping()
//!     .unwrap_or_default();
//! let profile = from_json_str(r#"{"models": {"materialized": "table"}, "threads": "4"}"#)?
//!     .into_mapping()
//!     .unwrap_or_default();
//!
//! let merged = deep_merge([&project, &profile]);
//! let view = LayeredMapping::new([&project, &profile]);
//! assert_eq!(view.len(), merged.len());
//!
//! let rendered = map_render(&ConfigValue::from(merged), |scalar, _| match scalar.as_str() {
//!     Some(text) => text.parse().map_or_else(|_| scalar.clone(), Scalar::Integer),
//!     None => scalar.clone(),
//! })?;
//! assert_eq!(
//!     rendered,
//!     from_json_str(r#"{"models": {"materialized": "table", "tags": ["a"]}, "threads": 4}"#)?
//! );
//! # Ok::<_, config_shape::ShapeError>(())
//! ```

pub mod convert;
mod error;
mod humanize;
mod keypath;
mod layered;
mod merge;
mod render;
mod result_ext;
mod value;

pub use convert::from_json_str;
#[cfg(feature = "toml")]
pub use convert::from_toml_str;
pub use error::{ShapeError, ShapeResult};
pub use humanize::{ExecutionTime, humanize_execution_time};
pub use keypath::{KeySegment, Keypath};
pub use layered::LayeredMapping;
pub use merge::{deep_merge, deep_merge_into, merge};
pub use render::{map_render, try_map_render};
pub use result_ext::ShapeResultExt;
pub use value::{ConfigValue, Mapping, OpaqueValue, Scalar, ValueKind};
