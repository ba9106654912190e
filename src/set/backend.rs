//! The backend contract and the tagged slot that holds the active backend.
//!
//! [`SetBackend`] is the operation set every representation provides.
//! [`Backend`] carries exactly one of the two representations together with
//! its tag, so callers switch on [`BackendKind`] instead of asking for the
//! concrete type at runtime.

use std::fmt;

use super::hashed::{HashBackend, HashBackendIterator};
use super::linear::{LinearBackend, LinearBackendIterator};

/// Operations shared by every set representation.
///
/// Adding a present value and removing an absent one are no-ops; neither is
/// an error.
pub trait SetBackend {
    /// Inserts `value`. Returns `true` if the value was not present before.
    fn add(&mut self, value: i32) -> bool;

    /// Removes `value`. Returns `true` if the value was present.
    fn remove(&mut self, value: i32) -> bool;

    /// Returns `true` if `value` is a member.
    fn contains(&self, value: i32) -> bool;

    /// Returns an owned copy of all members.
    fn elements(&self) -> Vec<i32>;

    /// Returns the number of members.
    fn len(&self) -> usize;

    /// Returns `true` if there are no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which representation is currently active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Unsorted vector with linear search.
    Linear,
    /// Hash set with expected constant-time membership.
    Hashed,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(formatter, "linear"),
            Self::Hashed => write!(formatter, "hashed"),
        }
    }
}

/// The single-owner slot holding one backend payload.
#[derive(Clone, Debug)]
pub(crate) enum Backend {
    Linear(LinearBackend),
    Hashed(HashBackend),
}

impl Backend {
    /// Creates an empty backend of the given kind, sized for `capacity` elements.
    pub(crate) fn with_capacity(kind: BackendKind, capacity: usize) -> Self {
        match kind {
            BackendKind::Linear => Self::Linear(LinearBackend::with_capacity(capacity)),
            BackendKind::Hashed => Self::Hashed(HashBackend::with_capacity(capacity)),
        }
    }

    #[inline]
    pub(crate) const fn kind(&self) -> BackendKind {
        match self {
            Self::Linear(_) => BackendKind::Linear,
            Self::Hashed(_) => BackendKind::Hashed,
        }
    }

    /// Builds a fresh backend of `target` kind holding every member of `self`.
    ///
    /// `self` is left untouched; the caller decides when to overwrite it.
    pub(crate) fn rebuilt_as(&self, target: BackendKind) -> Self {
        let snapshot = self.elements();
        let mut replacement = Self::with_capacity(target, snapshot.len());
        for value in snapshot {
            replacement.add(value);
        }
        replacement
    }

    #[inline]
    pub(crate) fn iter(&self) -> BackendIterator<'_> {
        match self {
            Self::Linear(backend) => BackendIterator::Linear(backend.iter()),
            Self::Hashed(backend) => BackendIterator::Hashed(backend.iter()),
        }
    }
}

impl SetBackend for Backend {
    #[inline]
    fn add(&mut self, value: i32) -> bool {
        match self {
            Self::Linear(backend) => backend.add(value),
            Self::Hashed(backend) => backend.add(value),
        }
    }

    #[inline]
    fn remove(&mut self, value: i32) -> bool {
        match self {
            Self::Linear(backend) => backend.remove(value),
            Self::Hashed(backend) => backend.remove(value),
        }
    }

    #[inline]
    fn contains(&self, value: i32) -> bool {
        match self {
            Self::Linear(backend) => backend.contains(value),
            Self::Hashed(backend) => backend.contains(value),
        }
    }

    fn elements(&self) -> Vec<i32> {
        match self {
            Self::Linear(backend) => backend.elements(),
            Self::Hashed(backend) => backend.elements(),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match self {
            Self::Linear(backend) => backend.len(),
            Self::Hashed(backend) => backend.len(),
        }
    }
}

/// Borrowing iterator over whichever backend is active.
pub(crate) enum BackendIterator<'a> {
    Linear(LinearBackendIterator<'a>),
    Hashed(HashBackendIterator<'a>),
}

impl Iterator for BackendIterator<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Linear(iter) => iter.next(),
            Self::Hashed(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Linear(iter) => iter.size_hint(),
            Self::Hashed(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for BackendIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BackendKind::Linear)]
    #[case(BackendKind::Hashed)]
    fn test_with_capacity_reports_requested_kind(#[case] kind: BackendKind) {
        let backend = Backend::with_capacity(kind, 4);
        assert_eq!(backend.kind(), kind);
        assert!(backend.is_empty());
    }

    #[rstest]
    #[case(BackendKind::Linear, BackendKind::Hashed)]
    #[case(BackendKind::Hashed, BackendKind::Linear)]
    fn test_rebuilt_as_preserves_members(#[case] source: BackendKind, #[case] target: BackendKind) {
        let mut backend = Backend::with_capacity(source, 0);
        for value in [5, -3, 12, 0] {
            backend.add(value);
        }

        let rebuilt = backend.rebuilt_as(target);

        assert_eq!(rebuilt.kind(), target);
        assert_eq!(rebuilt.len(), 4);
        for value in [5, -3, 12, 0] {
            assert!(rebuilt.contains(value));
        }
        assert_eq!(backend.kind(), source);
        assert_eq!(backend.len(), 4);
    }

    #[rstest]
    fn test_iter_matches_elements_order() {
        let mut backend = Backend::with_capacity(BackendKind::Hashed, 0);
        for value in 0..20 {
            backend.add(value);
        }

        let iterated: Vec<i32> = backend.iter().collect();
        assert_eq!(iterated, backend.elements());
        assert_eq!(backend.iter().len(), 20);
    }

    #[rstest]
    fn test_backend_kind_display() {
        assert_eq!(format!("{}", BackendKind::Linear), "linear");
        assert_eq!(format!("{}", BackendKind::Hashed), "hashed");
    }
}
