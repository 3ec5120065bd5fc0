//! Lock-step zipping adapters.

use crate::{
    cursor::{BoxCursor, Cursor},
    error::{EngineError, TraverseResult},
    row::Row,
};

/// Advances N same-typed sources in lock-step, yielding arity-N rows.
///
/// Shortest-wins: `has_more` is the conjunction over all sources, and a zip
/// of zero sources is exhausted (never an infinite stream of empty rows).
/// `pull` pulls exactly one value from each source in source order; callers
/// must check `has_more` first. Removal is unsupported.
pub struct ZippedCursor<T> {
    sources: Vec<BoxCursor<T>>,
}

impl<T> ZippedCursor<T> {
    /// Creates a zip over the given sources, in order.
    pub fn new(sources: Vec<BoxCursor<T>>) -> Self {
        Self { sources }
    }
}

impl<T> Cursor for ZippedCursor<T> {
    type Item = Row<T>;

    fn has_more(&mut self) -> bool {
        !self.sources.is_empty() && self.sources.iter_mut().all(|source| source.has_more())
    }

    fn pull(&mut self) -> TraverseResult<Row<T>> {
        if self.sources.is_empty() {
            return Err(EngineError::exhausted());
        }
        self.sources.iter_mut().map(|source| source.pull()).collect()
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        Err(EngineError::remove_unsupported("zipped cursor"))
    }
}

/// The typed two-source zip, yielding real `(A, B)` tuples.
///
/// Same shortest-wins contract as [`ZippedCursor`].
pub struct PairZipCursor<A, B> {
    left: BoxCursor<A>,
    right: BoxCursor<B>,
}

impl<A, B> PairZipCursor<A, B> {
    /// Creates a pairwise zip of `left` and `right`.
    pub fn new(left: BoxCursor<A>, right: BoxCursor<B>) -> Self {
        Self { left, right }
    }
}

impl<A, B> Cursor for PairZipCursor<A, B> {
    type Item = (A, B);

    fn has_more(&mut self) -> bool {
        self.left.has_more() && self.right.has_more()
    }

    fn pull(&mut self) -> TraverseResult<(A, B)> {
        let left = self.left.pull()?;
        let right = self.right.pull()?;
        Ok((left, right))
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        Err(EngineError::remove_unsupported("zipped cursor"))
    }
}
