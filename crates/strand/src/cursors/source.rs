//! Base source cursors: snapshot, shared mutable backing, and generators.

use std::{cell::RefCell, rc::Rc};

use crate::{
    cursor::Cursor,
    error::{EngineError, TraverseResult},
    view::View,
};

/// A cursor over an immutable shared snapshot of values.
///
/// Every traversal of a snapshot-backed view sees the same elements, cloned
/// on pull. There is no mutable backing sequence, so removal is unsupported.
#[derive(Debug)]
pub struct SnapshotCursor<T> {
    values: Rc<Vec<T>>,
    index: usize,
}

impl<T> SnapshotCursor<T> {
    /// Creates a cursor positioned at the start of the snapshot.
    #[must_use]
    pub fn new(values: Rc<Vec<T>>) -> Self {
        Self { values, index: 0 }
    }
}

impl<T: Clone> Cursor for SnapshotCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        self.index < self.values.len()
    }

    fn pull(&mut self) -> TraverseResult<T> {
        let Some(value) = self.values.get(self.index) else {
            return Err(EngineError::exhausted());
        };
        self.index += 1;
        Ok(value.clone())
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        Err(EngineError::remove_unsupported("snapshot source"))
    }
}

/// A mutable backing sequence shared between its owner and any cursors over it.
///
/// Cursors over a shared source re-check the backing length on every step,
/// so a sequence that shrinks mid-traversal simply ends early, and
/// `remove_last` through a removal-capable adapter chain is observable in
/// the backing vector afterwards.
#[derive(Debug)]
pub struct SharedSource<T> {
    values: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedSource<T> {
    /// Creates a shared source over the given values.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values: Rc::new(RefCell::new(values)),
        }
    }

    /// The current number of backing elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Returns whether the backing sequence is currently empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    /// A copy of the current backing elements.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.borrow().clone()
    }

    /// A re-iterable view whose cursors read (and may remove from) this
    /// backing sequence.
    #[must_use]
    pub fn view(&self) -> View<T>
    where
        T: Clone + 'static,
    {
        let values = Rc::clone(&self.values);
        View::generate(move || Box::new(SharedCursor::new(Rc::clone(&values))))
    }
}

impl<T> Clone for SharedSource<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
        }
    }
}

/// A cursor over a [`SharedSource`] backing sequence.
#[derive(Debug)]
pub struct SharedCursor<T> {
    values: Rc<RefCell<Vec<T>>>,
    index: usize,
    /// Whether the previously pulled element is still eligible for removal.
    removable: bool,
}

impl<T> SharedCursor<T> {
    fn new(values: Rc<RefCell<Vec<T>>>) -> Self {
        Self {
            values,
            index: 0,
            removable: false,
        }
    }
}

impl<T: Clone> Cursor for SharedCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        // Length is re-checked every step: the backing vector may have
        // shrunk since the last pull.
        self.index < self.values.borrow().len()
    }

    fn pull(&mut self) -> TraverseResult<T> {
        let values = self.values.borrow();
        let Some(value) = values.get(self.index) else {
            return Err(EngineError::exhausted());
        };
        let value = value.clone();
        drop(values);
        self.index += 1;
        self.removable = true;
        Ok(value)
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        if !self.removable {
            return Err(EngineError::remove_precondition(
                "remove_last requires a prior pull with no removal since",
            ));
        }
        self.removable = false;
        self.index -= 1;
        self.values.borrow_mut().remove(self.index);
        Ok(())
    }
}

/// An unbounded arithmetic generator: start, start + step, start + 2*step, …
///
/// Never exhausts; consumption must be bounded by the caller, e.g. with a
/// windowed subsequence.
#[derive(Debug)]
pub struct CountingCursor {
    next: i64,
    step: i64,
}

impl CountingCursor {
    /// Creates a counter yielding `start`, then incrementing by `step`.
    #[must_use]
    pub fn new(start: i64, step: i64) -> Self {
        Self { next: start, step }
    }
}

impl Cursor for CountingCursor {
    type Item = i64;

    fn has_more(&mut self) -> bool {
        true
    }

    fn pull(&mut self) -> TraverseResult<i64> {
        let value = self.next;
        self.next += self.step;
        Ok(value)
    }
}
