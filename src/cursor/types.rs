//! Pull vocabulary: which end to pull from and what a pull returns

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which cursor a pull advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Claim the element at `front`, then advance `front`
    Forward,

    /// Retreat `back`, then claim the element at `back`
    Backward,
}

impl Direction {
    /// The other end
    pub fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Outcome of a single pull
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PullResult<T> {
    /// An element was claimed (`done: false`)
    Value(T),

    /// The span is empty (`done: true`)
    Done,
}

impl<T> PullResult<T> {
    /// True once the iterator has nothing left
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Borrow the pulled value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Done => None,
        }
    }

    /// Convert into the std iterator convention
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Done => None,
        }
    }

    /// Map the pulled value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PullResult<U> {
        match self {
            Self::Value(value) => PullResult::Value(f(value)),
            Self::Done => PullResult::Done,
        }
    }
}

impl<T> From<Option<T>> for PullResult<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Done,
        }
    }
}

/// Pull counters for one cursor.
///
/// Diagnostics only; they never influence cursor behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PullStats {
    /// Pulls that yielded from the front
    pub forward: usize,

    /// Pulls that yielded from the back
    pub backward: usize,

    /// Pulls that found the span empty
    pub exhausted: usize,
}

impl PullStats {
    /// Elements yielded so far
    pub fn yielded(&self) -> usize {
        self.forward + self.backward
    }

    pub(crate) fn record(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.forward += 1,
            Direction::Backward => self.backward += 1,
        }
    }
}
