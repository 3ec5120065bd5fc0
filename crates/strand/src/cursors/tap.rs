//! The side-effecting tap adapter.

use crate::{
    cursor::{BoxCursor, Cursor, EffectFn},
    error::{EngineError, TraverseResult},
};

/// Forwards elements unchanged, invoking a side-effecting callback per pull.
///
/// Removal is unsupported: the side effect has already fired for the pulled
/// element and cannot be undone.
pub struct TapCursor<T> {
    upstream: BoxCursor<T>,
    effect: EffectFn<T>,
}

impl<T> TapCursor<T> {
    /// Creates a tap over `upstream`.
    pub fn new(upstream: BoxCursor<T>, effect: EffectFn<T>) -> Self {
        Self { upstream, effect }
    }
}

impl<T> Cursor for TapCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        self.upstream.has_more()
    }

    fn pull(&mut self) -> TraverseResult<T> {
        let value = self.upstream.pull()?;
        (self.effect)(&value);
        Ok(value)
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        Err(EngineError::remove_unsupported("tap cursor"))
    }
}
