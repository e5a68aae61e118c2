//! Paths locating a node inside a configuration tree.
//!
//! A [`Keypath`] is built incrementally while a traversal descends and is
//! handed to callbacks by reference. The root is the empty path.
//!
//! # Examples
//!
//! ```rust
//! use config_shape::{KeySegment, Keypath};
//!
//! let mut path = Keypath::root();
//! path.push("foo");
//! path.push("baz");
//! path.push(1_usize);
//! assert_eq!(path.to_string(), "foo.baz[1]");
//! assert!(path.matches(&["foo".into(), "baz".into(), 1.into()]));
//! ```

use std::fmt;

/// One step of a [`Keypath`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeySegment {
    /// Key of a mapping entry.
    Key(String),
    /// Position within a sequence.
    Index(usize),
}

impl KeySegment {
    /// Borrow the key, if this segment addresses a mapping entry.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }

    /// Returns the index, if this segment addresses a sequence element.
    #[must_use]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Key(_) => None,
        }
    }
}

impl From<&str> for KeySegment {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

impl From<String> for KeySegment {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<usize> for KeySegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Ordered sequence of keys and indices from the root to a node.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Keypath {
    segments: Vec<KeySegment>,
}

impl Keypath {
    /// The empty path addressing the root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Alias for [`Keypath::is_root`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Borrow the segments in root-to-leaf order.
    #[must_use]
    pub fn segments(&self) -> &[KeySegment] {
        &self.segments
    }

    /// Returns the final segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&KeySegment> {
        self.segments.last()
    }

    /// Returns `true` when the path equals `segments` exactly.
    #[must_use]
    pub fn matches(&self, segments: &[KeySegment]) -> bool {
        self.segments.as_slice() == segments
    }

    /// Extend the path by one segment.
    pub fn push(&mut self, segment: impl Into<KeySegment>) {
        self.segments.push(segment.into());
    }

    /// Remove and return the final segment.
    pub fn pop(&mut self) -> Option<KeySegment> {
        self.segments.pop()
    }

    /// Returns a new path extended by `segment`, leaving `self` untouched.
    #[must_use]
    pub fn join(&self, segment: impl Into<KeySegment>) -> Self {
        let mut joined = self.clone();
        joined.push(segment);
        joined
    }
}

impl FromIterator<KeySegment> for Keypath {
    fn from_iter<I: IntoIterator<Item = KeySegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Keypath {
    type Item = &'a KeySegment;
    type IntoIter = std::slice::Iter<'a, KeySegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Dotted rendering such as `foo.baz[1]`; the root renders as `<root>`.
impl fmt::Display for Keypath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                KeySegment::Key(key) if position > 0 => write!(f, ".{key}")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeySegment, Keypath};
    use rstest::rstest;

    fn path(segments: &[KeySegment]) -> Keypath {
        segments.iter().cloned().collect()
    }

    #[rstest]
    #[case(&[], "<root>")]
    #[case(&["foo".into()], "foo")]
    #[case(&["foo".into(), "baz".into(), 1.into()], "foo.baz[1]")]
    #[case(&[0.into(), "test".into()], "[0].test")]
    #[case(&["nested".into(), 1.into(), 2.into()], "nested[1][2]")]
    fn displays_dotted_paths(#[case] segments: &[KeySegment], #[case] expected: &str) {
        assert_eq!(path(segments).to_string(), expected);
    }

    #[test]
    fn push_and_pop_restore_the_previous_path() {
        let mut keypath = Keypath::root();
        keypath.push("foo");
        keypath.push(3_usize);
        assert_eq!(keypath.len(), 2);
        assert_eq!(keypath.pop(), Some(KeySegment::Index(3)));
        assert_eq!(keypath.pop(), Some(KeySegment::from("foo")));
        assert!(keypath.is_root());
        assert_eq!(keypath.pop(), None);
    }

    #[test]
    fn join_leaves_the_original_untouched() {
        let base = path(&["foo".into()]);
        let joined = base.join("bar");
        assert_eq!(base.len(), 1);
        assert!(joined.matches(&["foo".into(), "bar".into()]));
    }

    #[test]
    fn segment_accessors_distinguish_keys_and_indices() {
        assert_eq!(KeySegment::from("a").as_key(), Some("a"));
        assert_eq!(KeySegment::from("a").as_index(), None);
        assert_eq!(KeySegment::from(4).as_index(), Some(4));
        assert_eq!(KeySegment::from(4).as_key(), None);
    }
}
