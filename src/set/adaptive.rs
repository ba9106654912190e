//! Integer set that switches its backend on a size threshold.
//!
//! # State Transitions
//!
//! ```text
//!                add (len == THRESHOLD + 1)
//!     Linear ─────────────────────────────► Hashed
//!       ▲                                     │
//!       └─────────────────────────────────────┘
//!                remove (len == THRESHOLD)
//! ```
//!
//! A new set starts out `Linear`. After every mutation the size is checked
//! against [`THRESHOLD`]: more than `THRESHOLD` members means `Hashed`, at
//! most `THRESHOLD` means `Linear`. Single-element `add` and `remove` move
//! the size one step at a time, so a transition fires exactly when the size
//! lands on `THRESHOLD + 1` going up or on `THRESHOLD` going down.
//!
//! # Examples
//!
//! ```rust
//! use adaptive_int_set::set::{AdaptiveIntSet, BackendKind};
//!
//! let mut set = AdaptiveIntSet::new();
//! for value in 1..=11 {
//!     set.add(value);
//! }
//! assert_eq!(set.backend_kind(), BackendKind::Hashed);
//!
//! set.remove(5);
//! assert_eq!(set.backend_kind(), BackendKind::Linear);
//! assert_eq!(set.len(), 10);
//! ```

use std::fmt;

use tracing::{debug, trace};

use super::THRESHOLD;
use super::backend::{Backend, BackendIterator, BackendKind, SetBackend};

/// An integer set holding exactly one backend at a time.
///
/// All operations are total. Adding a member twice or removing a
/// non-member leaves the set unchanged.
#[derive(Clone)]
pub struct AdaptiveIntSet {
    backend: Backend,
}

static_assertions::assert_impl_all!(AdaptiveIntSet: Send, Sync, Clone, Default);

impl AdaptiveIntSet {
    /// Creates an empty, linear-backed set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adaptive_int_set::set::{AdaptiveIntSet, BackendKind};
    ///
    /// let set = AdaptiveIntSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.backend_kind(), BackendKind::Linear);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            backend: Backend::with_capacity(BackendKind::Linear, 0),
        }
    }

    /// Adds `value` to the set.
    ///
    /// Migrates to the hashed backend when this pushes the size past
    /// [`THRESHOLD`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adaptive_int_set::set::AdaptiveIntSet;
    ///
    /// let mut set = AdaptiveIntSet::new();
    /// set.add(3);
    /// set.add(3);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: i32) {
        if self.backend.add(value) {
            trace!(value, size = self.backend.len(), "added element");
            self.rebalance();
        }
    }

    /// Removes `value` from the set.
    ///
    /// Migrates back to the linear backend when this brings the size down
    /// to [`THRESHOLD`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adaptive_int_set::set::AdaptiveIntSet;
    ///
    /// let mut set: AdaptiveIntSet = [1, 2].into_iter().collect();
    /// set.remove(1);
    /// set.remove(42);
    /// assert_eq!(set.elements(), vec![2]);
    /// ```
    pub fn remove(&mut self, value: i32) {
        if self.backend.remove(value) {
            trace!(value, size = self.backend.len(), "removed element");
            self.rebalance();
        }
    }

    /// Returns `true` if `value` is a member.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.backend.contains(value)
    }

    /// Returns an owned copy of the members.
    ///
    /// The order is insertion order while the set is linear-backed and hash
    /// table order while it is hash-backed. The returned vector shares
    /// nothing with the set.
    #[must_use]
    pub fn elements(&self) -> Vec<i32> {
        self.backend.elements()
    }

    /// Returns the number of members.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Returns which backend currently stores the members.
    #[inline]
    #[must_use]
    pub const fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Returns an iterator over the members in [`elements`](Self::elements)
    /// order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.backend.iter(),
        }
    }

    /// Returns a new set holding every member of `self` or `other`.
    ///
    /// The result is grown one element at a time, so it migrates exactly
    /// like a set filled through [`add`](Self::add).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adaptive_int_set::set::AdaptiveIntSet;
    ///
    /// let left: AdaptiveIntSet = [1, 2, 3].into_iter().collect();
    /// let right: AdaptiveIntSet = [2, 3, 100].into_iter().collect();
    ///
    /// let union = left.union_with(&right);
    /// assert_eq!(union.len(), 4);
    /// assert!(union.contains(100));
    /// ```
    #[must_use]
    pub fn union_with(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for value in self.elements() {
            result.add(value);
        }
        for value in other.elements() {
            result.add(value);
        }
        result
    }

    /// Returns a new set holding the members of `self` that `other` also
    /// contains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adaptive_int_set::set::AdaptiveIntSet;
    ///
    /// let left: AdaptiveIntSet = [1, 2, 3].into_iter().collect();
    /// let right: AdaptiveIntSet = [2, 3, 100].into_iter().collect();
    ///
    /// let intersection = left.intersect_with(&right);
    /// assert_eq!(intersection.len(), 2);
    /// assert!(!intersection.contains(1));
    /// ```
    #[must_use]
    pub fn intersect_with(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for value in self.elements() {
            if other.contains(value) {
                result.add(value);
            }
        }
        result
    }

    /// Moves to the backend the current size calls for.
    fn rebalance(&mut self) {
        let size = self.backend.len();
        let target = match self.backend.kind() {
            BackendKind::Linear if size > THRESHOLD => BackendKind::Hashed,
            BackendKind::Hashed if size <= THRESHOLD => BackendKind::Linear,
            _ => return,
        };
        self.migrate(target);
    }

    fn migrate(&mut self, target: BackendKind) {
        let replacement = self.backend.rebuilt_as(target);
        debug!(
            from = %self.backend.kind(),
            to = %target,
            size = replacement.len(),
            "switching set backend"
        );
        self.backend = replacement;
    }
}

impl Default for AdaptiveIntSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AdaptiveIntSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for AdaptiveIntSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl PartialEq for AdaptiveIntSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl Eq for AdaptiveIntSet {}

impl FromIterator<i32> for AdaptiveIntSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<i32> for AdaptiveIntSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

/// Borrowing iterator over an [`AdaptiveIntSet`].
pub struct Iter<'a> {
    inner: BackendIterator<'a>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AdaptiveIntSet {
    type Item = i32;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for AdaptiveIntSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(&element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct AdaptiveIntSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for AdaptiveIntSetVisitor {
    type Value = AdaptiveIntSet;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = AdaptiveIntSet::new();
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AdaptiveIntSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(AdaptiveIntSetVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
