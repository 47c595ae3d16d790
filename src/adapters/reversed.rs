use std::iter::FusedIterator;

use crate::cursor::{BiIterator, Direction, PullResult};
use crate::source::{BiSource, StableSource};
use crate::Result;

/// Lazy, single-pass sequence that always pulls from the back.
///
/// Bounded by the cursor's remaining span at construction. Restarting
/// requires a fresh cursor.
#[derive(Debug)]
pub struct Reversed<S: BiSource> {
    inner: BiIterator<S>,
}

/// Replay the remaining span of `iter` in reverse overall order
pub fn reversed<S: BiSource>(iter: BiIterator<S>) -> Reversed<S> {
    Reversed { inner: iter }
}

impl<S: BiSource> Reversed<S> {
    /// Next element from the back, or `None` once done.
    ///
    /// Surfaces source errors such as a mutated shared vector.
    pub fn try_next(&mut self) -> Result<Option<S::Item>> {
        self.inner
            .pull(Direction::Backward)
            .map(PullResult::into_option)
    }

    /// Elements left to replay
    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    /// Recover the underlying cursor
    pub fn into_inner(self) -> BiIterator<S> {
        self.inner
    }
}

impl<S: StableSource> Iterator for Reversed<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S: StableSource> ExactSizeIterator for Reversed<S> {}

impl<S: StableSource> FusedIterator for Reversed<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SharedVec;
    use crate::BiIterError;

    #[test]
    fn test_reverses_whole_sequence() {
        let values = [1, 2, 3, 4, 5, 6];
        let iter = BiIterator::new(&values[..]).unwrap();
        let out: Vec<i32> = reversed(iter).copied().collect();
        assert_eq!(out, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_only_remaining_span_is_replayed() {
        let mut iter = BiIterator::from_bounded_iter(1..=5).unwrap();
        assert_eq!(iter.next(), Some(1));

        let mut rev = reversed(iter);
        assert_eq!(rev.len(), 4);
        assert_eq!(rev.next(), Some(5));

        let inner = rev.into_inner();
        assert_eq!(inner.stats().backward, 1);
        assert_eq!(inner.into_remaining(), vec![2, 3, 4]);
    }

    #[test]
    fn test_try_next_surfaces_mutation() {
        let shared = SharedVec::new(vec!['a', 'b', 'c']);
        let mut rev = reversed(BiIterator::new(shared.clone()).unwrap());
        assert_eq!(rev.try_next().unwrap(), Some('c'));

        shared.borrow_mut().pop();
        assert!(matches!(
            rev.try_next(),
            Err(BiIterError::MutatedSource {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_try_next_ends_with_none() {
        let shared = SharedVec::new(vec![1]);
        let mut rev = reversed(BiIterator::new(shared).unwrap());
        assert_eq!(rev.try_next().unwrap(), Some(1));
        assert_eq!(rev.try_next().unwrap(), None);
        assert_eq!(rev.try_next().unwrap(), None);
        assert_eq!(rev.remaining(), 0);
    }
}
