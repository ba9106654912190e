//! # adaptive-int-set
//!
//! An integer set that picks its internal representation by size.
//!
//! Small sets live in an unsorted vector where a linear scan beats hashing.
//! Once a set grows past [`set::THRESHOLD`] members it moves its contents
//! into a hash set, and it moves back when it shrinks to the threshold.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`set::AdaptiveIntSet`]
//! - `fxhash`: hash backend uses `rustc-hash`
//! - `ahash`: hash backend uses `ahash`
//!
//! ## Example
//!
//! ```rust
//! use adaptive_int_set::prelude::*;
//!
//! let a: AdaptiveIntSet = (1..=11).collect();
//! let b: AdaptiveIntSet = [2, 3, 100].into_iter().collect();
//!
//! assert_eq!(a.backend_kind(), BackendKind::Hashed);
//! assert_eq!(a.intersect_with(&b).len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use adaptive_int_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;
