//! The flattening adapter over a cursor of cursors.

use crate::{
    cursor::{BoxCursor, Cursor},
    error::{EngineError, TraverseResult},
};

/// Flattens a sequence of sequences into one.
///
/// Keeps one current sub-cursor; when it exhausts, advances through the
/// outer cursor until a sub-cursor with more elements is found or the outer
/// is exhausted. Removal delegates to the current sub-cursor.
pub struct ChainedCursor<T> {
    outer: BoxCursor<BoxCursor<T>>,
    current: Option<BoxCursor<T>>,
}

impl<T> ChainedCursor<T> {
    /// Creates a chained cursor over an outer cursor of sub-cursors.
    pub fn new(outer: BoxCursor<BoxCursor<T>>) -> Self {
        Self { outer, current: None }
    }
}

impl<T> Cursor for ChainedCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        loop {
            if let Some(current) = &mut self.current
                && current.has_more()
            {
                return true;
            }
            if !self.outer.has_more() {
                return false;
            }
            match self.outer.pull() {
                Ok(next) => self.current = Some(next),
                Err(_) => return false,
            }
        }
    }

    fn pull(&mut self) -> TraverseResult<T> {
        if !self.has_more() {
            return Err(EngineError::exhausted());
        }
        self.current
            .as_mut()
            .expect("has_more positioned a current sub-cursor")
            .pull()
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        match &mut self.current {
            Some(current) => current.remove_last(),
            None => Err(EngineError::remove_precondition(
                "remove_last requires a prior pull from a sub-cursor",
            )),
        }
    }
}
