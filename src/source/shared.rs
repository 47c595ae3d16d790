use std::cell::{Cell, Ref, RefCell, RefMut};
use std::rc::Rc;

use super::BiSource;
use crate::{BiIterError, Result};

/// Live, shared handle to a growable vector.
///
/// Unlike a borrowed slice, the vector behind this handle can still be
/// mutated through another clone while a cursor walks it. Every write
/// access bumps a shared counter, and a cursor whose counter snapshot is
/// stale fails with
/// [`BiIterError::MutatedSource`](crate::BiIterError::MutatedSource).
/// Not thread-safe; clones share one `Rc`.
#[derive(Debug, Default)]
pub struct SharedVec<T> {
    inner: Rc<Shared<T>>,
}

#[derive(Debug, Default)]
struct Shared<T> {
    values: RefCell<Vec<T>>,

    /// Mutable accesses handed out so far
    writes: Cell<u64>,
}

impl<T> SharedVec<T> {
    /// Wrap a vector in a shared handle
    pub fn new(values: Vec<T>) -> Self {
        Self {
            inner: Rc::new(Shared {
                values: RefCell::new(values),
                writes: Cell::new(0),
            }),
        }
    }

    /// Immutable view of the current contents
    pub fn borrow(&self) -> Ref<'_, Vec<T>> {
        self.inner.values.borrow()
    }

    /// Mutable view of the current contents.
    ///
    /// Counts as a write whether or not the guard is used to change anything.
    pub fn borrow_mut(&self) -> RefMut<'_, Vec<T>> {
        let guard = self.inner.values.borrow_mut();
        self.inner.writes.set(self.inner.writes.get() + 1);
        guard
    }

    /// Append a value
    pub fn push(&self, value: T) {
        self.borrow_mut().push(value);
    }

    /// Current length
    pub fn len(&self) -> usize {
        self.inner.values.borrow().len()
    }

    /// Whether the vector is currently empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Clone for SharedVec<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> From<Vec<T>> for SharedVec<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: Clone> BiSource for SharedVec<T> {
    type Item = T;

    fn len(&self) -> Option<usize> {
        // Busy reads are reported by `ensure_readable`, checked first.
        self.inner.values.try_borrow().ok().map(|values| values.len())
    }

    fn fetch(&mut self, index: usize) -> Option<T> {
        self.inner.values.try_borrow().ok()?.get(index).cloned()
    }

    fn generation(&self) -> u64 {
        self.inner.writes.get()
    }

    fn ensure_readable(&self) -> Result<()> {
        self.inner
            .values
            .try_borrow()
            .map(drop)
            .map_err(|_| BiIterError::SourceBusy(self.describe()))
    }

    fn describe(&self) -> String {
        format!("shared vector of {}", std::any::type_name::<T>())
    }
}
