use std::any::type_name;

use super::{BiSource, StableSource};
use crate::{BiIterError, Result};

/// Eager owned copy of a finite sequence.
///
/// Elements are moved out as they are fetched, so each slot is emptied
/// exactly once and nothing needs to be cloned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    slots: Vec<Option<T>>,
}

impl<T> Snapshot<T> {
    /// Snapshot an iterator, rejecting it if it has no upper size bound.
    ///
    /// An iterator without an upper bound may never end, so it has no right
    /// boundary to pull backward from.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        match iter.size_hint() {
            (_, Some(_)) => Ok(Self {
                slots: iter.map(Some).collect(),
            }),
            (_, None) => Err(BiIterError::UnsupportedSourceKind(format!(
                "iterator {} without an upper size bound",
                type_name::<I::IntoIter>()
            ))),
        }
    }

    /// Number of slots, taken or not
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Elements not yet fetched, in original order
    pub fn into_untaken(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }
}

impl<T> From<Vec<T>> for Snapshot<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}

impl<T> BiSource for Snapshot<T> {
    type Item = T;

    fn len(&self) -> Option<usize> {
        Some(self.slots.len())
    }

    fn fetch(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    fn describe(&self) -> String {
        format!("snapshot of {}", type_name::<T>())
    }
}

impl<T> StableSource for Snapshot<T> {}
