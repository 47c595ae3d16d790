//! Sources a cursor can walk
//!
//! A source is an ordered collection with a known right boundary.
//! Each index is fetched at most once by a [`BiIterator`], which lets
//! owning sources hand out elements by move.

mod shared;
mod snapshot;

pub use shared::SharedVec;
pub use snapshot::Snapshot;

use crate::cursor::BiIterator;
use crate::Result;

/// Ordered collection that can be consumed from both ends
pub trait BiSource {
    /// Element type handed out by [`fetch`](BiSource::fetch)
    type Item;

    /// Current number of elements, or `None` for unbounded sources
    fn len(&self) -> Option<usize>;

    /// Element at `index`, or `None` if it is out of range or already taken
    fn fetch(&mut self, index: usize) -> Option<Self::Item>;

    /// Write counter, bumped on every mutable access to the contents.
    ///
    /// A cursor records it at construction and refuses to pull once it
    /// moves, even if the length happens to match again.
    fn generation(&self) -> u64 {
        0
    }

    /// Fails with [`BiIterError::SourceBusy`](crate::BiIterError::SourceBusy)
    /// while the contents cannot be read (e.g. a live write guard).
    fn ensure_readable(&self) -> Result<()> {
        Ok(())
    }

    /// Human-readable kind, used in diagnostics
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Sources whose length cannot change once a cursor exists.
///
/// Pulls over these never fail, so the cursor also implements the std
/// iterator traits for them.
pub trait StableSource: BiSource {}

impl<'a, T> BiSource for &'a [T] {
    type Item = &'a T;

    fn len(&self) -> Option<usize> {
        Some(<[T]>::len(self))
    }

    fn fetch(&mut self, index: usize) -> Option<&'a T> {
        let items: &'a [T] = *self;
        items.get(index)
    }

    fn describe(&self) -> String {
        format!("slice of {}", std::any::type_name::<T>())
    }
}

// A shared borrow pins the slice for 'a.
impl<T> StableSource for &[T] {}

/// Conversion into a [`BiIterator`]
pub trait IntoBiIterator {
    /// Source the cursor walks
    type Source: BiSource;

    /// Build a cursor spanning the whole collection
    fn into_bi_iter(self) -> Result<BiIterator<Self::Source>>;
}

impl<'a, T> IntoBiIterator for &'a [T] {
    type Source = &'a [T];

    fn into_bi_iter(self) -> Result<BiIterator<&'a [T]>> {
        BiIterator::new(self)
    }
}

impl<'a, T> IntoBiIterator for &'a Vec<T> {
    type Source = &'a [T];

    fn into_bi_iter(self) -> Result<BiIterator<&'a [T]>> {
        BiIterator::new(self.as_slice())
    }
}

impl<T> IntoBiIterator for Vec<T> {
    type Source = Snapshot<T>;

    fn into_bi_iter(self) -> Result<BiIterator<Snapshot<T>>> {
        BiIterator::new(Snapshot::from(self))
    }
}

impl<T: Clone> IntoBiIterator for SharedVec<T> {
    type Source = SharedVec<T>;

    fn into_bi_iter(self) -> Result<BiIterator<SharedVec<T>>> {
        BiIterator::new(self)
    }
}
