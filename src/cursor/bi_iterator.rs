use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use super::{Direction, PullResult, PullStats};
use crate::source::{BiSource, Snapshot, StableSource};
use crate::{BiIterError, Result};

/// Cursor consumable from both ends of a finite source.
///
/// Forward pulls return elements left-to-right, backward pulls right-to-left,
/// and an element claimed by one end is never visible to the other.
///
/// Not thread-safe: callers serialize pulls against one instance.
#[derive(Debug)]
pub struct BiIterator<S: BiSource> {
    source: S,

    /// Index of the next forward element
    front: usize,

    /// One past the last unclaimed element
    back: usize,

    /// Source length snapshotted at construction
    len: usize,

    /// Source write counter snapshotted at construction
    generation: u64,

    stats: PullStats,
}

impl<S: BiSource> BiIterator<S> {
    /// Create a cursor spanning the whole source.
    ///
    /// Fails with [`BiIterError::UnsupportedSourceKind`] when the source
    /// cannot report a length.
    pub fn new(source: S) -> Result<Self> {
        source.ensure_readable()?;
        let Some(len) = source.len() else {
            let kind = source.describe();
            debug!(%kind, "rejecting source without a length");
            return Err(BiIterError::UnsupportedSourceKind(kind));
        };

        let generation = source.generation();
        debug!(len, generation, kind = %source.describe(), "cursor created");
        Ok(Self {
            source,
            front: 0,
            back: len,
            len,
            generation,
            stats: PullStats::default(),
        })
    }

    /// Claim one element from the given end.
    ///
    /// Once the span is empty this returns [`PullResult::Done`] forever
    /// without consulting the source. Otherwise the source must be readable
    /// and unwritten since construction; a write is never forgiven, even if
    /// it restored the original length.
    pub fn pull(&mut self, direction: Direction) -> Result<PullResult<S::Item>> {
        if !self.is_exhausted() {
            self.check_source()?;
        }
        Ok(self.advance(direction))
    }

    /// Stop iterating without yielding anything further. Idempotent.
    pub fn close(&mut self) {
        if !self.is_exhausted() {
            debug!(
                front = self.front,
                back = self.back,
                discarded = self.remaining(),
                "cursor closed early"
            );
        }
        self.front = self.back;
    }

    /// Size of the unclaimed span `back - front`
    pub fn remaining(&self) -> usize {
        self.back - self.front
    }

    /// True once `front == back`
    pub fn is_exhausted(&self) -> bool {
        self.front == self.back
    }

    /// Index of the next forward element
    pub fn front(&self) -> usize {
        self.front
    }

    /// One past the last unclaimed element
    pub fn back(&self) -> usize {
        self.back
    }

    /// Source length at construction (named apart from `ExactSizeIterator::len`,
    /// which reports the remaining span)
    pub fn source_len(&self) -> usize {
        self.len
    }

    /// Pull counters so far
    pub fn stats(&self) -> PullStats {
        self.stats
    }

    /// Shared access to the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    fn check_source(&self) -> Result<()> {
        self.source.ensure_readable()?;
        let Some(actual) = self.source.len() else {
            return Err(BiIterError::UnsupportedSourceKind(self.source.describe()));
        };
        if actual != self.len || self.source.generation() != self.generation {
            warn!(
                expected = self.len,
                actual,
                generation = self.generation,
                current = self.source.generation(),
                "source written under cursor"
            );
            return Err(BiIterError::MutatedSource {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }

    /// Move one cursor and fetch the claimed element. Never fails.
    fn advance(&mut self, direction: Direction) -> PullResult<S::Item> {
        if self.is_exhausted() {
            self.stats.exhausted += 1;
            return PullResult::Done;
        }

        let index = match direction {
            Direction::Forward => {
                self.front += 1;
                self.front - 1
            }
            Direction::Backward => {
                self.back -= 1;
                self.back
            }
        };
        trace!(?direction, index, front = self.front, back = self.back, "pull");

        match self.source.fetch(index) {
            Some(value) => {
                self.stats.record(direction);
                PullResult::Value(value)
            }
            None => {
                // Only reachable if the source broke its fetch contract.
                warn!(index, "source returned nothing for a claimed index");
                self.close();
                self.stats.exhausted += 1;
                PullResult::Done
            }
        }
    }
}

impl<T> BiIterator<Snapshot<T>> {
    /// Snapshot a bounded iterator and span it.
    ///
    /// Iterators whose `size_hint` has no upper bound (e.g. `repeat`, `0..`)
    /// are rejected with [`BiIterError::UnsupportedSourceKind`].
    pub fn from_bounded_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(Snapshot::try_from_iter(iter)?)
    }

    /// Move out every element not yet yielded, in original order.
    ///
    /// Counts as forward pulls; the cursor is exhausted afterwards.
    pub fn take_remaining(&mut self) -> Vec<T> {
        let mut rest = Vec::with_capacity(self.remaining());
        while !self.is_exhausted() {
            if let PullResult::Value(value) = self.advance(Direction::Forward) {
                rest.push(value);
            }
        }
        rest
    }

    /// Elements not yet yielded, in original order
    pub fn into_remaining(mut self) -> Vec<T> {
        self.take_remaining()
    }
}

impl<S: StableSource> Iterator for BiIterator<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance(Direction::Forward).into_option()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<S: StableSource> DoubleEndedIterator for BiIterator<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.advance(Direction::Backward).into_option()
    }
}

impl<S: StableSource> ExactSizeIterator for BiIterator<S> {}

impl<S: StableSource> FusedIterator for BiIterator<S> {}
