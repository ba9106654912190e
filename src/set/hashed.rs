//! Hash-backed set with expected constant-time membership.
//!
//! The hasher is picked by Cargo feature:
//!
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState` (ignored when `fxhash` is also enabled)
//! - neither: the standard library's `RandomState`
//!
//! Iteration order follows the hash table layout. It is stable for a given
//! instance between mutations, but two sets with the same members may
//! iterate differently.

use std::collections::HashSet;
use std::collections::hash_set;
use std::iter::Copied;

use super::backend::SetBackend;

#[cfg(feature = "fxhash")]
type ElementHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type ElementHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type ElementHasher = std::collections::hash_map::RandomState;

/// Hash set of distinct integers.
#[derive(Clone, Debug, Default)]
pub struct HashBackend {
    elements: HashSet<i32, ElementHasher>,
}

impl HashBackend {
    /// Creates an empty backend.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty backend able to hold `capacity` elements without
    /// rehashing.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: HashSet::with_capacity_and_hasher(capacity, ElementHasher::default()),
        }
    }

    /// Returns an iterator over the members in table order.
    #[inline]
    pub fn iter(&self) -> HashBackendIterator<'_> {
        self.elements.iter().copied()
    }
}

/// Iterator over a [`HashBackend`] in table order.
pub type HashBackendIterator<'a> = Copied<hash_set::Iter<'a, i32>>;

impl SetBackend for HashBackend {
    #[inline]
    fn add(&mut self, value: i32) -> bool {
        self.elements.insert(value)
    }

    #[inline]
    fn remove(&mut self, value: i32) -> bool {
        self.elements.remove(&value)
    }

    #[inline]
    fn contains(&self, value: i32) -> bool {
        self.elements.contains(&value)
    }

    fn elements(&self) -> Vec<i32> {
        self.elements.iter().copied().collect()
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sorted(mut values: Vec<i32>) -> Vec<i32> {
        values.sort_unstable();
        values
    }

    #[rstest]
    fn test_new_is_empty() {
        let backend = HashBackend::new();
        assert!(backend.is_empty());
        assert_eq!(backend.len(), 0);
    }

    #[rstest]
    fn test_add_and_contains() {
        let mut backend = HashBackend::new();
        assert!(backend.add(42));
        assert!(backend.contains(42));
        assert!(!backend.contains(43));
    }

    #[rstest]
    fn test_add_duplicate_is_noop() {
        let mut backend = HashBackend::new();
        backend.add(5);
        assert!(!backend.add(5));
        assert_eq!(backend.len(), 1);
    }

    #[rstest]
    fn test_remove_absent_is_noop() {
        let mut backend = HashBackend::with_capacity(8);
        backend.add(1);
        assert!(!backend.remove(2));
        assert!(backend.remove(1));
        assert!(backend.is_empty());
    }

    #[rstest]
    fn test_elements_contains_every_member_once() {
        let mut backend = HashBackend::new();
        for value in (0..50).chain(0..50) {
            backend.add(value);
        }
        assert_eq!(sorted(backend.elements()), (0..50).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_elements_stable_without_mutation() {
        let mut backend = HashBackend::new();
        for value in [9, -9, 1000, 3] {
            backend.add(value);
        }
        assert_eq!(backend.elements(), backend.elements());
    }
}
