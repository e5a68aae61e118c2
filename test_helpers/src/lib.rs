//! Test helpers shared across crates.
//!
//! This crate provides builders that turn `serde_json::json!` literals into
//! configuration trees, plus the canonical nested document used by the
//! structural-mapping suites.

pub mod builders;
pub mod fixtures;
