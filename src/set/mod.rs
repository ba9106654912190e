//! Integer sets with size-driven backend selection.
//!
//! - [`AdaptiveIntSet`]: the set clients use. Holds one backend and switches
//!   between them as it grows and shrinks.
//! - [`LinearBackend`]: unsorted vector, linear search. Active while the set
//!   has at most [`THRESHOLD`] members.
//! - [`HashBackend`]: hash set. Active while the set has more than
//!   [`THRESHOLD`] members.
//!
//! Both backends implement [`SetBackend`] and can be used on their own.
//!
//! # Examples
//!
//! ```rust
//! use adaptive_int_set::set::{AdaptiveIntSet, BackendKind, THRESHOLD};
//!
//! let mut set = AdaptiveIntSet::new();
//! for value in 0..=i32::try_from(THRESHOLD).unwrap() {
//!     set.add(value);
//! }
//! assert_eq!(set.len(), THRESHOLD + 1);
//! assert_eq!(set.backend_kind(), BackendKind::Hashed);
//!
//! let other: AdaptiveIntSet = [0, 1, 1000].into_iter().collect();
//! assert_eq!(set.intersect_with(&other).len(), 2);
//! assert_eq!(set.union_with(&other).len(), THRESHOLD + 2);
//! ```

/// Size at or below which a set is linear-backed.
pub const THRESHOLD: usize = 10;

mod adaptive;
mod backend;
mod hashed;
mod linear;

pub use adaptive::AdaptiveIntSet;
pub use adaptive::Iter;
pub use backend::BackendKind;
pub use backend::SetBackend;
pub use hashed::HashBackend;
pub use hashed::HashBackendIterator;
pub use linear::LinearBackend;
pub use linear::LinearBackendIterator;
