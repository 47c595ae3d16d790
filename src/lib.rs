//! # Double-ended iteration
//!
//! A cursor over a finite ordered collection that can be consumed from
//! either end, plus two helpers built on top of it.
//!
//! ## Core Model
//!
//! 1. **Span**: the half-open region `[front, back)` of not-yet-yielded elements
//! 2. **Pull**: one call, parameterized by [`Direction`], claims one element
//!    from the matching end and shrinks the span by exactly one
//! 3. **Termination**: once `front == back` every pull returns [`PullResult::Done`]
//!
//! Elements claimed from one end are never visible from the other, so any
//! interleaving of forward and backward pulls yields each element exactly once.
//!
//! ## Usage Example
//!
//! ```
//! use bidi_iter::{drain, reversed, BiIterator, Direction, PullResult};
//!
//! let values = [1, 2, 3, 4, 5, 6];
//!
//! let mut iter = BiIterator::new(&values[..])?;
//! assert_eq!(iter.pull(Direction::Forward)?, PullResult::Value(&1));
//! assert_eq!(iter.pull(Direction::Backward)?, PullResult::Value(&6));
//!
//! let rest: Vec<_> = reversed(iter).copied().collect();
//! assert_eq!(rest, vec![5, 4, 3, 2]);
//!
//! // let [first, second, ...skipped, last] = values
//! let drained = drain(BiIterator::new(&values[..])?, 2, 1)?;
//! assert_eq!(drained.head, vec![&1, &2]);
//! assert_eq!(drained.tail, vec![&6]);
//! assert_eq!(drained.middle_skipped, 3);
//! # Ok::<(), bidi_iter::BiIterError>(())
//! ```
//!
//! ## Threading
//!
//! A [`BiIterator`] is a single-writer cursor with no internal locking.
//! Callers must serialize all pulls against one instance.

#![warn(missing_docs, missing_debug_implementations)]

pub mod adapters; // Reversed and Drain helpers
pub mod cursor; // BiIterator, Direction, PullResult
pub mod source; // Collections a cursor can walk

pub use adapters::{drain, reversed, Drained, Reversed};
pub use cursor::{BiIterator, Direction, PullResult, PullStats};
pub use source::{BiSource, IntoBiIterator, SharedVec, Snapshot, StableSource};

use thiserror::Error;

/// Errors raised by cursor construction, pulls and the helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BiIterError {
    /// Source has no determinable length, so it has no right boundary
    #[error("Unsupported source kind: {0} has no determinable length")]
    UnsupportedSourceKind(String),

    /// Argument outside its domain (e.g. a negative drain count)
    #[error("Invalid argument: {name} = {value} must be a non-negative count")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Value as supplied by the caller
        value: String,
    },

    /// Source was written to since the cursor was constructed
    #[error("Source mutated since construction: length was {expected}, now {actual}")]
    MutatedSource {
        /// Length snapshotted at construction
        expected: usize,
        /// Length observed on the failing pull
        actual: usize,
    },

    /// Source cannot be read right now (e.g. a write guard is alive)
    #[error("Source busy: {0} is borrowed for writing")]
    SourceBusy(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BiIterError>;
