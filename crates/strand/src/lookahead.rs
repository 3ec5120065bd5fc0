//! Shared "find and cache the next admissible value" behavior.
//!
//! Adapters that must peek ahead to answer `has_more` without guessing
//! (comprehension, subsequence) own a [`Lookahead`] and inject their search
//! as a closure over the remaining fields. Composition rather than
//! inheritance: the buffer holds only the three-way state, the adapter
//! supplies the search.

use crate::error::{EngineError, TraverseResult};

/// The none/cached/exhausted state used to answer "has more" without
/// double-consuming an element.
#[derive(Debug)]
pub(crate) enum Lookahead<T> {
    /// No cached value; the next query must run the search.
    Empty,
    /// The next admissible value, found by a search and not yet pulled.
    Cached(T),
    /// The search reported no further admissible values. Terminal.
    Exhausted,
}

impl<T> Lookahead<T> {
    /// Returns whether the buffer holds no cached value and is not exhausted.
    ///
    /// Adapters use this to detect that the next `has_more` will run a
    /// search (which matters for removal eligibility).
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns whether the buffer has reached its terminal state.
    pub(crate) fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Ensures a value is cached, running `search` if needed.
    ///
    /// Returns true if a value is (now) cached. A search returning `None`
    /// transitions the buffer to `Exhausted`, after which `ensure` is false
    /// forever without re-running the search.
    pub(crate) fn ensure(&mut self, search: impl FnOnce() -> Option<T>) -> bool {
        match self {
            Self::Cached(_) => true,
            Self::Exhausted => false,
            Self::Empty => match search() {
                Some(value) => {
                    *self = Self::Cached(value);
                    true
                }
                None => {
                    *self = Self::Exhausted;
                    false
                }
            },
        }
    }

    /// Clears and returns the cached value, running `search` first if the
    /// buffer is empty. Fails with an exhausted-sequence error if no value
    /// can be produced.
    pub(crate) fn take(&mut self, search: impl FnOnce() -> Option<T>) -> TraverseResult<T> {
        if !self.ensure(search) {
            return Err(EngineError::exhausted());
        }
        match std::mem::replace(self, Self::Empty) {
            Self::Cached(value) => Ok(value),
            _ => unreachable!("ensure() returned true without caching a value"),
        }
    }
}
