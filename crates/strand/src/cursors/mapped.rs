//! The per-element transform adapter.

use crate::{
    cursor::{BoxCursor, Cursor, TransformFn},
    error::TraverseResult,
};

/// Applies a transform to every element pulled from the upstream.
///
/// Structurally 1:1 with the upstream and keeps no lookahead of its own, so
/// all three operations forward directly; removal eligibility is exactly the
/// upstream's.
pub struct MappedCursor<T, U> {
    upstream: BoxCursor<T>,
    transform: TransformFn<T, U>,
}

impl<T, U> MappedCursor<T, U> {
    /// Creates a mapped cursor over `upstream`.
    pub fn new(upstream: BoxCursor<T>, transform: TransformFn<T, U>) -> Self {
        Self { upstream, transform }
    }
}

impl<T, U> Cursor for MappedCursor<T, U> {
    type Item = U;

    fn has_more(&mut self) -> bool {
        self.upstream.has_more()
    }

    fn pull(&mut self) -> TraverseResult<U> {
        let value = self.upstream.pull()?;
        Ok((self.transform)(value))
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        self.upstream.remove_last()
    }
}
