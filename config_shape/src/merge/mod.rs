//! Recursive merging of mapping fragments.
//!
//! Fragments are applied in order, so later fragments take precedence:
//!
//! - when both sides hold a mapping under a key, the mappings merge
//!   recursively;
//! - otherwise the later value replaces the earlier one outright. Sequences
//!   are replaced, never concatenated, and a mapping replaces a non-mapping
//!   (and vice versa).
//!
//! Keys keep the position where they were first inserted; keys introduced by
//! a later fragment are appended.

use tracing::trace;

use crate::{ConfigValue, Mapping};

/// Deep-merge `fragments` into a new mapping without touching the inputs.
///
/// Zero fragments yield an empty mapping and a single fragment yields an
/// independent copy of it.
///
/// # Examples
///
/// ```rust
/// use config_shape::{deep_merge, from_json_str};
///
/// let base = from_json_str(r#"{"a": 1, "b": {"x": 1}, "c": [1, 2]}"#)?.into_mapping().unwrap_or_default();
/// let overlay = from_json_str(r#"{"b": {"y": 2}, "c": [3]}"#)?.into_mapping().unwrap_or_default();
///
/// let merged = deep_merge([&base, &overlay]);
/// let expected = from_json_str(r#"{"a": 1, "b": {"x": 1, "y": 2}, "c": [3]}"#)?.into_mapping().unwrap_or_default();
/// assert_eq!(merged, expected);
/// # Ok::<_, config_shape::ShapeError>(())
/// ```
#[must_use]
pub fn deep_merge<'a, I>(fragments: I) -> Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    let mut merged = Mapping::new();
    let mut count = 0_usize;
    for fragment in fragments {
        deep_merge_into(&mut merged, fragment);
        count += 1;
    }
    trace!(fragments = count, keys = merged.len(), "deep-merged mapping fragments");
    merged
}

/// Deep-merge `source` into `destination`, updating `destination` in place.
///
/// This is the only merge entry point that writes into a caller-supplied
/// mapping; `source` is only read.
///
/// # Examples
///
/// ```rust
/// use config_shape::{deep_merge_into, ConfigValue, Mapping};
///
/// let mut destination: Mapping = [("a".to_owned(), ConfigValue::from(1))].into_iter().collect();
/// let source: Mapping = [("b".to_owned(), ConfigValue::from(2))].into_iter().collect();
/// deep_merge_into(&mut destination, &source);
/// assert_eq!(destination.len(), 2);
/// ```
pub fn deep_merge_into(destination: &mut Mapping, source: &Mapping) {
    for (key, value) in source {
        match (destination.get_mut(key), value) {
            (Some(ConfigValue::Mapping(existing)), ConfigValue::Mapping(incoming)) => {
                deep_merge_into(existing, incoming);
            }
            (Some(existing), _) => *existing = value.clone(),
            (None, _) => {
                destination.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Shallow merge: later fragments replace earlier values key by key, without
/// recursing into nested mappings.
///
/// # Examples
///
/// ```rust
/// use config_shape::{merge, from_json_str};
///
/// let base = from_json_str(r#"{"a": {"x": 1}, "b": 1}"#)?.into_mapping().unwrap_or_default();
/// let overlay = from_json_str(r#"{"a": {"y": 2}}"#)?.into_mapping().unwrap_or_default();
///
/// let merged = merge([&base, &overlay]);
/// let expected = from_json_str(r#"{"a": {"y": 2}, "b": 1}"#)?.into_mapping().unwrap_or_default();
/// assert_eq!(merged, expected);
/// # Ok::<_, config_shape::ShapeError>(())
/// ```
#[must_use]
pub fn merge<'a, I>(fragments: I) -> Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    let mut merged = Mapping::new();
    for fragment in fragments {
        merged.extend(
            fragment
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
    merged
}
