//! mergetree is a range-merge tree (segment tree) over a fixed sequence of elements
//!
//! A [RangeMergeTree] answers "merge every element in `[left, right]`" queries and single
//! position updates in `O(log n)`, for any associative [Merger] such as sum, min, max or
//! string concatenation.
//!
//! # Example
//!
//! ```
//! use mergetree::{merger::Sum, RangeMergeTree};
//!
//! let mut tree = RangeMergeTree::new(vec![-2i64, 0, 3, -5, 2, -1], Sum);
//! assert_eq!(tree.query(0, 2), Ok(1));
//! assert_eq!(tree.query(2, 5), Ok(-1));
//!
//! tree.set(3, 10).unwrap();
//! assert_eq!(tree.query(2, 5), Ok(14));
//! assert_eq!(tree.query(0, 5), Ok(12));
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(nonstandard_style, missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use core::{fmt, fmt::Display, matches, write};

/// Associative merge operations and pre-defined mergers (SUM, PRODUCT, MIN, MAX, CONCAT)
pub mod merger;
/// Range-merge tree
pub mod tree;

pub use merger::Merger;
pub use tree::RangeMergeTree;

#[cfg(feature = "profiler")]
pub use tree::stats::Stats;

/// A type containing error variants that may arise when using a [RangeMergeTree]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A position or query bound is outside `[0, len - 1]` (always the case for an empty tree)
    OutOfRange {
        /// The offending position
        position: usize,
        /// Number of positions in the tree
        len: usize,
    },
    /// A query whose left bound is greater than its right bound
    InvalidRange {
        /// Left query bound
        left: usize,
        /// Right query bound
        right: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { position, len } => {
                write!(f, "position {position} is out of range for tree of length {len}")
            }
            Error::InvalidRange { left, right } => {
                write!(f, "invalid range: left bound {left} is greater than right bound {right}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Returns `true` if the error represents [Error::OutOfRange]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
    /// Returns `true` if the error represents [Error::InvalidRange]
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Error::InvalidRange { .. })
    }
}
