//! The windowed sub-sequencing adapter.

use crate::{
    cursor::{BoxCursor, Cursor},
    error::{EngineError, TraverseResult},
    lookahead::Lookahead,
    window::Window,
};

/// Applies a validated start/stop/step window to the upstream.
///
/// Construction eagerly advances the upstream by `start` elements
/// ("progress to start"). After that, the first emission consumes one
/// upstream element and every later one consumes `step` (skip `step - 1`,
/// then pull one); before consuming, the cursor checks whether the
/// consumption budget would pass the stop bound. Upstream exhaustion
/// mid-skip or at the final pull exhausts the window too.
pub struct SubsequenceCursor<T> {
    upstream: BoxCursor<T>,
    stop: Option<usize>,
    step: usize,
    /// Number of upstream elements consumed so far, including the
    /// progress-to-start prefix and all skips.
    consumed: usize,
    /// Whether the next emission is the first (which never skips).
    first: bool,
    buffer: Lookahead<T>,
    /// Same eligibility flag as the comprehension cursor: cleared by
    /// removal and by any lookahead search.
    removable: bool,
}

impl<T> SubsequenceCursor<T> {
    /// Creates a windowed cursor over `upstream`, advancing it past the
    /// window's start prefix immediately.
    pub fn new(mut upstream: BoxCursor<T>, window: Window) -> Self {
        let start = window.start();
        let mut consumed = 0;
        while consumed < start && upstream.has_more() {
            // Discarded prefix; errors cannot occur after has_more.
            if upstream.pull().is_err() {
                break;
            }
            consumed += 1;
        }
        let buffer = if consumed < start {
            // Upstream ended inside the prefix: nothing to emit.
            Lookahead::Exhausted
        } else {
            Lookahead::Empty
        };
        Self {
            upstream,
            stop: window.stop(),
            step: window.step(),
            consumed,
            first: true,
            buffer,
            removable: false,
        }
    }
}

/// Consumes the next emission's budget from the upstream: `needed - 1`
/// skipped elements, then one pulled element as the result.
fn find_windowed<T>(
    upstream: &mut BoxCursor<T>,
    stop: Option<usize>,
    needed: usize,
    consumed: &mut usize,
) -> Option<T> {
    if let Some(stop) = stop
        && *consumed + needed > stop
    {
        return None;
    }
    for _ in 1..needed {
        if !upstream.has_more() {
            return None;
        }
        upstream.pull().ok()?;
        *consumed += 1;
    }
    if !upstream.has_more() {
        return None;
    }
    let value = upstream.pull().ok()?;
    *consumed += 1;
    Some(value)
}

impl<T> Cursor for SubsequenceCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        let Self {
            upstream,
            stop,
            step,
            consumed,
            first,
            buffer,
            removable,
        } = self;
        if buffer.is_empty() {
            *removable = false;
        }
        let needed = if *first { 1 } else { *step };
        let found = buffer.ensure(|| find_windowed(upstream, *stop, needed, consumed));
        if found {
            *first = false;
        }
        found
    }

    fn pull(&mut self) -> TraverseResult<T> {
        if !self.has_more() {
            return Err(EngineError::exhausted());
        }
        let value = self.buffer.take(|| None)?;
        self.removable = true;
        Ok(value)
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        if self.buffer.is_exhausted() {
            return Err(EngineError::remove_precondition(
                "remove_last is blocked once the window is exhausted",
            ));
        }
        if !self.removable {
            return Err(EngineError::remove_precondition(
                "remove_last requires a pull with no removal or lookahead since",
            ));
        }
        self.removable = false;
        self.upstream.remove_last()
    }
}
