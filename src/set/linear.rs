//! Vector-backed set with linear search.
//!
//! Elements are kept in insertion order. Removal shifts the survivors left,
//! so their relative order never changes. Storage is inline up to
//! [`INLINE_CAPACITY`] elements, which covers every size this backend holds
//! while it is active inside an [`AdaptiveIntSet`](super::AdaptiveIntSet).
//!
//! # Time Complexity
//!
//! | Operation  | Cost |
//! |------------|------|
//! | `add`      | O(n) |
//! | `remove`   | O(n) |
//! | `contains` | O(n) |
//! | `elements` | O(n) |

use std::iter::Copied;
use std::slice;

use smallvec::SmallVec;

use super::THRESHOLD;
use super::backend::SetBackend;

/// Inline capacity: one past the threshold, the largest size reached right
/// before a migration to the hashed backend.
const INLINE_CAPACITY: usize = THRESHOLD + 1;

/// Unsorted vector of distinct integers.
#[derive(Clone, Debug, Default)]
pub struct LinearBackend {
    elements: SmallVec<[i32; INLINE_CAPACITY]>,
}

impl LinearBackend {
    /// Creates an empty backend.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Creates an empty backend able to hold `capacity` elements without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
        }
    }

    /// Returns an iterator over the members in insertion order.
    #[inline]
    pub fn iter(&self) -> LinearBackendIterator<'_> {
        self.elements.iter().copied()
    }

    /// Returns `true` if the elements have spilled out of inline storage.
    #[cfg(test)]
    fn spilled(&self) -> bool {
        self.elements.spilled()
    }
}

/// Iterator over a [`LinearBackend`] in insertion order.
pub type LinearBackendIterator<'a> = Copied<slice::Iter<'a, i32>>;

impl SetBackend for LinearBackend {
    fn add(&mut self, value: i32) -> bool {
        if self.contains(value) {
            return false;
        }
        self.elements.push(value);
        true
    }

    fn remove(&mut self, value: i32) -> bool {
        match self.elements.iter().position(|&element| element == value) {
            Some(position) => {
                self.elements.remove(position);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn contains(&self, value: i32) -> bool {
        self.elements.contains(&value)
    }

    fn elements(&self) -> Vec<i32> {
        self.elements.to_vec()
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }
}
