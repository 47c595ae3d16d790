use std::fmt::Display;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cursor::{BiIterator, Direction, PullResult};
use crate::source::BiSource;
use crate::{BiIterError, Result};

/// Boundary elements extracted by [`drain`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Drained<T> {
    /// First elements, in original order
    pub head: Vec<T>,

    /// Last elements, in original order
    pub tail: Vec<T>,

    /// Elements between head and tail that were never fetched
    pub middle_skipped: usize,
}

impl<T> Drained<T> {
    /// Split into `(head, tail, middle_skipped)`
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, usize) {
        (self.head, self.tail, self.middle_skipped)
    }
}

/// Extract the first `head_count` and last `tail_count` elements of the
/// remaining span without fetching anything in between.
///
/// This is `let [a, b, ...skipped, z] = iterable` without building
/// `skipped`. Head requests are served first: when the counts cover the
/// whole span, a contested middle element lands in `head` and is never
/// duplicated into `tail`. The cursor is closed afterwards.
///
/// Counts must convert to `usize`; negative values fail with
/// [`BiIterError::InvalidArgument`] before anything is pulled.
pub fn drain<S, H, K>(
    mut iter: BiIterator<S>,
    head_count: H,
    tail_count: K,
) -> Result<Drained<S::Item>>
where
    S: BiSource,
    H: TryInto<usize> + Copy + Display,
    K: TryInto<usize> + Copy + Display,
{
    let head_count = count_arg("head_count", head_count)?;
    let tail_count = count_arg("tail_count", tail_count)?;

    let total = iter.remaining();
    let head_take = head_count.min(total);
    let tail_take = tail_count.min(total - head_take);

    let mut head = Vec::with_capacity(head_take);
    let mut tail = Vec::with_capacity(tail_take);

    // Alternate ends, as a destructuring pattern would bind them.
    while head.len() < head_take || tail.len() < tail_take {
        if head.len() < head_take {
            match iter.pull(Direction::Forward)? {
                PullResult::Value(value) => head.push(value),
                PullResult::Done => break,
            }
        }
        if tail.len() < tail_take {
            match iter.pull(Direction::Backward)? {
                PullResult::Value(value) => tail.push(value),
                PullResult::Done => break,
            }
        }
    }
    tail.reverse();

    let middle_skipped = iter.remaining();
    iter.close();

    debug!(
        total,
        head = head.len(),
        tail = tail.len(),
        middle_skipped,
        "drained boundaries"
    );

    Ok(Drained {
        head,
        tail,
        middle_skipped,
    })
}

fn count_arg<C>(name: &'static str, value: C) -> Result<usize>
where
    C: TryInto<usize> + Copy + Display,
{
    value
        .try_into()
        .map_err(|_| BiIterError::InvalidArgument {
            name,
            value: value.to_string(),
        })
}
