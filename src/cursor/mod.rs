//! Double-ended cursor
//!
//! Two logical cursors over a source of known length:
//! `front` (next forward element) and `back` (one past the last unclaimed
//! element). Invariant: `0 <= front <= back <= len`.
//!
//! Each non-done pull shrinks `[front, back)` by exactly one; the span
//! never grows, and termination is permanent.

mod bi_iterator;
mod types;

pub use bi_iterator::BiIterator;
pub use types::{Direction, PullResult, PullStats};
