//! The bounded/unbounded cycling adapter.

use crate::{
    cursor::{BoxCursor, Cursor},
    error::{EngineError, TraverseResult},
};

/// Repeats the upstream a bounded or unbounded number of times.
///
/// While the upstream still has unread elements, each pulled element is
/// appended to a memo buffer before being returned, so a single-pass
/// upstream can be re-traversed. Once the upstream is exhausted, passes
/// replay the memo from index 0; a completed replay increments the pass
/// counter, checked against the optional limit. The initial read-through
/// counts as the first pass.
///
/// Removal is unsupported: memo reuse makes structural removal unsafe.
pub struct CyclicCursor<T> {
    upstream: BoxCursor<T>,
    memo: Vec<T>,
    /// Replay index within the current pass (memo coordinates).
    position: usize,
    /// Completed passes.
    passes: usize,
    /// Pass limit; `None` cycles forever.
    limit: Option<usize>,
    /// Whether the upstream has been fully read into the memo.
    source_done: bool,
}

impl<T> CyclicCursor<T> {
    /// Creates a cycling cursor over `upstream`.
    ///
    /// A limit of `Some(0)` is immediately exhausted regardless of source;
    /// `None` cycles without bound.
    pub fn new(upstream: BoxCursor<T>, limit: Option<usize>) -> Self {
        Self {
            upstream,
            memo: Vec::new(),
            position: 0,
            passes: 0,
            limit,
            source_done: false,
        }
    }

    fn at_limit(&self) -> bool {
        self.limit.is_some_and(|limit| self.passes >= limit)
    }

    /// Records the completed first pass once the upstream runs dry, so both
    /// `has_more` and `pull` agree on the pass count at the boundary.
    fn finish_source_if_done(&mut self) {
        if !self.source_done && !self.upstream.has_more() {
            self.source_done = true;
            self.passes = 1;
            self.position = 0;
        }
    }
}

impl<T: Clone> Cursor for CyclicCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        if self.limit == Some(0) {
            return false;
        }
        self.finish_source_if_done();
        if !self.source_done {
            // Mid first pass: passes is 0, so a non-zero limit cannot be hit.
            return true;
        }
        !self.memo.is_empty() && !self.at_limit()
    }

    fn pull(&mut self) -> TraverseResult<T> {
        if self.limit == Some(0) {
            return Err(EngineError::exhausted());
        }
        self.finish_source_if_done();
        if !self.source_done {
            let value = self.upstream.pull()?;
            self.memo.push(value.clone());
            return Ok(value);
        }
        if self.memo.is_empty() || self.at_limit() {
            return Err(EngineError::exhausted());
        }
        let value = self.memo[self.position].clone();
        self.position += 1;
        if self.position == self.memo.len() {
            self.position = 0;
            self.passes += 1;
        }
        Ok(value)
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        Err(EngineError::remove_unsupported("cyclic cursor"))
    }
}
