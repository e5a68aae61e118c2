//! Read-only, last-wins view over an ordered set of mapping fragments.
//!
//! A [`LayeredMapping`] borrows its layers rather than copying them. The
//! borrow ties the view's lifetime to every layer it references, and the
//! layers cannot be mutated while the view exists.
//!
//! # Examples
//!
//! ```rust
//! use config_shape::{ConfigValue, LayeredMapping, Mapping};
//!
//! fn fragment(pairs: &[(&str, i64)]) -> Mapping {
//!     pairs
//!         .iter()
//!         .map(|&(key, value)| (key.to_owned(), ConfigValue::from(value)))
//!         .collect()
//! }
//!
//! let defaults = fragment(&[("a", 1), ("b", 2)]);
//! let overrides = fragment(&[("b", 20), ("c", 30)]);
//!
//! let view = LayeredMapping::new([&defaults, &overrides]);
//! assert_eq!(view.len(), 3);
//! assert_eq!(view.lookup("b")?, &ConfigValue::from(20));
//! assert!(view.lookup("missing").is_err());
//! # Ok::<_, config_shape::ShapeError>(())
//! ```

use indexmap::IndexSet;

use crate::{ConfigValue, Mapping, ShapeError, ShapeResult};

/// Composite view over borrowed mapping layers; later layers shadow earlier
/// ones on key collision.
#[derive(Clone, Debug, Default)]
pub struct LayeredMapping<'a> {
    layers: Vec<&'a Mapping>,
}

impl<'a> LayeredMapping<'a> {
    /// Build a view over `layers`, lowest precedence first.
    #[must_use]
    pub fn new<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = &'a Mapping>,
    {
        Self {
            layers: layers.into_iter().collect(),
        }
    }

    /// Borrow the layers, lowest precedence first.
    #[must_use]
    pub fn layers(&self) -> &[&'a Mapping] {
        &self.layers
    }

    /// Returns `true` when any layer holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.layers.iter().any(|layer| layer.contains_key(key))
    }

    /// Value of `key` from the last layer that holds it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a ConfigValue> {
        self.layers.iter().copied().rev().find_map(|layer| layer.get(key))
    }

    /// Like [`LayeredMapping::get`], but absent keys are an error.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::KeyNotFound`] when no layer holds `key`.
    pub fn lookup(&self, key: &str) -> ShapeResult<&'a ConfigValue> {
        self.get(key).ok_or_else(|| ShapeError::key_not_found(key))
    }

    /// Number of distinct keys across all layers.
    ///
    /// The key union is rebuilt on every call, so this costs time linear in
    /// the total number of keys held by the layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.key_union().len()
    }

    /// Returns `true` when no layer holds any key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.is_empty())
    }

    /// Distinct keys in the order they are first seen, scanning layers from
    /// lowest to highest precedence.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.key_union().into_iter()
    }

    /// Distinct keys paired with their effective values, in
    /// [`LayeredMapping::keys`] order.
    ///
    /// Each key is resolved with [`LayeredMapping::get`], so a full pass costs
    /// `O(keys × layers)`. Use [`LayeredMapping::to_mapping`] for repeated
    /// access.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a ConfigValue)> + '_ {
        self.keys()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    /// Collapse the view into an owned mapping holding each key's effective
    /// value. Nested mappings are not merged.
    #[must_use]
    pub fn to_mapping(&self) -> Mapping {
        self.iter()
            .map(|(key, value)| (key.to_owned(), value.clone()))
            .collect()
    }

    fn key_union(&self) -> IndexSet<&'a str> {
        self.layers
            .iter()
            .copied()
            .flat_map(|layer| layer.keys().map(String::as_str))
            .collect()
    }
}

impl<'a> FromIterator<&'a Mapping> for LayeredMapping<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Mapping>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests;
