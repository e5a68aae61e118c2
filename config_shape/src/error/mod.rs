//! Error types produced by structural operations.

mod constructors;
mod types;

pub use types::{ShapeError, ShapeResult};
