//! The fused filter-and-map ("comprehension") adapter.

use crate::{
    cursor::{BoxCursor, Cursor, PredicateFn, TransformFn},
    error::{EngineError, TraverseResult},
    lookahead::Lookahead,
};

/// Fuses a short-circuiting conjunction of predicates with a transform in
/// one pass.
///
/// Built on the lookahead buffer: `has_more` searches the upstream for the
/// next element accepted by every predicate, caches its transformed value,
/// and `pull` drains the cache. Zero predicates degenerates to an
/// unconditional map.
pub struct ComprehensionCursor<T, U> {
    upstream: BoxCursor<T>,
    transform: TransformFn<T, U>,
    predicates: Vec<PredicateFn<T>>,
    buffer: Lookahead<U>,
    /// Whether the most recently pulled element is still eligible for
    /// delegated removal. Cleared by removal itself and by any lookahead
    /// search, which advances the upstream past the delivered element.
    removable: bool,
}

impl<T, U> ComprehensionCursor<T, U> {
    /// Creates a comprehension over `upstream`.
    pub fn new(upstream: BoxCursor<T>, transform: TransformFn<T, U>, predicates: Vec<PredicateFn<T>>) -> Self {
        Self {
            upstream,
            transform,
            predicates,
            buffer: Lookahead::Empty,
            removable: false,
        }
    }
}

/// Pulls from the upstream until an element passes every predicate, then
/// emits its transformed value. `None` when the upstream exhausts first.
fn find_accepted<T, U>(
    upstream: &mut BoxCursor<T>,
    transform: &TransformFn<T, U>,
    predicates: &[PredicateFn<T>],
) -> Option<U> {
    while upstream.has_more() {
        let value = upstream.pull().ok()?;
        if predicates.iter().all(|accepts| accepts(&value)) {
            return Some(transform(value));
        }
    }
    None
}

impl<T, U> Cursor for ComprehensionCursor<T, U> {
    type Item = U;

    fn has_more(&mut self) -> bool {
        let Self {
            upstream,
            transform,
            predicates,
            buffer,
            removable,
        } = self;
        if buffer.is_empty() {
            // The search about to run advances the upstream, so the last
            // pulled element is no longer the upstream's last pull.
            *removable = false;
        }
        buffer.ensure(|| find_accepted(upstream, transform, predicates))
    }

    fn pull(&mut self) -> TraverseResult<U> {
        let Self {
            upstream,
            transform,
            predicates,
            buffer,
            removable,
        } = self;
        let value = buffer.take(|| find_accepted(upstream, transform, predicates))?;
        *removable = true;
        Ok(value)
    }

    fn remove_last(&mut self) -> TraverseResult<()> {
        if !self.removable {
            return Err(EngineError::remove_precondition(
                "remove_last requires a pull with no removal or lookahead since",
            ));
        }
        self.removable = false;
        self.upstream.remove_last()
    }
}
