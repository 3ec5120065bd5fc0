//! The cursor capability contract: query-for-more, pull-next, optional removal.
//!
//! A cursor is a single-traversal, stateful pull-based reader over a sequence.
//! It is owned exclusively by whoever is actively traversing it and is
//! discarded once exhausted or abandoned. Re-usable descriptions live in the
//! [`View`](crate::View) layer, which manufactures a fresh cursor per traversal.

use std::rc::Rc;

use crate::error::{EngineError, TraverseResult};

/// Shared per-element transform, handed by a view to every cursor it makes.
pub type TransformFn<T, U> = Rc<dyn Fn(T) -> U>;

/// Shared single-argument predicate (`&T -> bool`).
pub type PredicateFn<T> = Rc<dyn Fn(&T) -> bool>;

/// Shared side-effecting callback invoked per element by the tap adapter.
pub type EffectFn<T> = Rc<dyn Fn(&T)>;

/// A pull-based reader over a sequence of `Item`s.
///
/// Contract:
/// - `has_more` is idempotent: it can be called any number of times between
///   `pull` calls without changing observable state. It may consume exactly
///   one element of upstream lookahead, which is cached and reused by the
///   next `pull`.
/// - `pull` advances, and fails with an exhausted-sequence error when no
///   more elements are available; it never substitutes a default value.
/// - `remove_last` is valid only immediately after a `pull` that produced a
///   value and has not yet had a removal since. Adapters without a
///   legitimate 1:1 mapping to a mutable backing element fail with an
///   unsupported-operation error, which is also the default implementation.
pub trait Cursor {
    /// The element type this cursor yields.
    type Item;

    /// Returns whether another element is available, without consuming it.
    fn has_more(&mut self) -> bool;

    /// Pulls the next element, advancing the cursor.
    fn pull(&mut self) -> TraverseResult<Self::Item>;

    /// Removes the most recently pulled element from the mutable backing
    /// sequence, where the adapter chain supports it.
    fn remove_last(&mut self) -> TraverseResult<()> {
        Err(EngineError::remove_unsupported("this cursor"))
    }
}

/// A boxed, dynamically dispatched cursor.
pub type BoxCursor<T> = Box<dyn Cursor<Item = T>>;

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    fn pull(&mut self) -> TraverseResult<Self::Item> {
        (**self).pull()
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        (**self).remove_last()
    }
}
