//! Eager operations: build the lazy view, then materialize.
//!
//! Every function here drains a freshly manufactured cursor into a concrete
//! ordered container (or folds it into a single value). None of them keep
//! state between calls; the input view can be traversed again afterwards if
//! its source is re-iterable.

use std::rc::Rc;

use crate::{
    error::{EngineError, TraverseResult},
    view::View,
    window,
};

/// Drains a view fully into an ordered container.
///
/// Repeatedly checks `has_more` and pulls until exhausted.
pub fn materialize<T: 'static>(view: &View<T>) -> Vec<T> {
    let mut cursor = view.cursor();
    let mut values = Vec::new();
    while cursor.has_more() {
        match cursor.pull() {
            Ok(value) => values.push(value),
            Err(_) => break,
        }
    }
    values
}

/// Applies a transform elementwise, eagerly.
pub fn map<T: 'static, U: 'static>(view: &View<T>, transform: impl Fn(T) -> U + 'static) -> Vec<U> {
    materialize(&view.map(transform))
}

/// Keeps the elements accepted by `predicate`, eagerly.
pub fn filter<T: 'static>(view: &View<T>, predicate: impl Fn(&T) -> bool + 'static) -> Vec<T> {
    materialize(&view.filter(predicate))
}

/// Keeps the elements rejected by `predicate`, eagerly.
pub fn reject<T: 'static>(view: &View<T>, predicate: impl Fn(&T) -> bool + 'static) -> Vec<T> {
    materialize(&view.reject(predicate))
}

/// The first `n` elements, eagerly.
pub fn take<T: 'static>(view: &View<T>, n: usize) -> Vec<T> {
    materialize(&view.take(n))
}

/// Everything after the first `n` elements, eagerly.
pub fn drop<T: 'static>(view: &View<T>, n: usize) -> Vec<T> {
    materialize(&view.skip(n))
}

/// Python-like slicing over the materialized sequence.
///
/// Start and stop may be negative (counting back from the end) or absent;
/// step may be negative (reverse traversal) but not zero. The index
/// resolution, including its deliberate clamp asymmetry and the wraparound
/// when the resolved start lies past the resolved stop, lives in
/// [`crate::window`].
pub fn slice<T: Clone + 'static>(
    view: &View<T>,
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> TraverseResult<Vec<T>> {
    let values = materialize(view);
    window::slice_values(&values, start, stop, step)
}

/// Groups the sequence into consecutive chunks of at most `size` elements.
///
/// Fails with an invalid-argument error when `size` is zero. The final
/// chunk may be short; an empty sequence yields no chunks.
pub fn batch<T: 'static>(view: &View<T>, size: usize) -> TraverseResult<Vec<Vec<T>>> {
    if size == 0 {
        return Err(EngineError::invalid_argument("batch size must be at least 1"));
    }
    let mut cursor = view.cursor();
    let mut batches = Vec::new();
    let mut current = Vec::with_capacity(size);
    while cursor.has_more() {
        let value = cursor.pull()?;
        current.push(value);
        if current.len() == size {
            batches.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        batches.push(current);
    }
    Ok(batches)
}

/// The sequence repeated `times` times, eagerly.
pub fn repeat<T: Clone + 'static>(view: &View<T>, times: usize) -> Vec<T> {
    materialize(&view.cycle(Some(times)))
}

/// Folds the sequence with the first produced element as the seed.
///
/// Fails with an exhausted-sequence error on an empty source.
pub fn reduce<T: 'static>(view: &View<T>, combine: impl Fn(T, T) -> T) -> TraverseResult<T> {
    let mut cursor = view.cursor();
    if !cursor.has_more() {
        return Err(EngineError::exhausted());
    }
    let mut accumulator = cursor.pull()?;
    while cursor.has_more() {
        let value = cursor.pull()?;
        accumulator = combine(accumulator, value);
    }
    Ok(accumulator)
}

/// Folds the sequence with an explicit seed.
///
/// An empty source returns the seed unchanged.
pub fn fold<T: 'static, A>(view: &View<T>, seed: A, combine: impl Fn(A, T) -> A) -> A {
    let mut cursor = view.cursor();
    let mut accumulator = seed;
    while cursor.has_more() {
        let Ok(value) = cursor.pull() else { break };
        accumulator = combine(accumulator, value);
    }
    accumulator
}

/// The first element, or `None` for an empty source.
pub fn first<T: 'static>(view: &View<T>) -> Option<T> {
    let mut cursor = view.cursor();
    if cursor.has_more() { cursor.pull().ok() } else { None }
}

/// The last element, or `None` for an empty source.
pub fn last<T: 'static>(view: &View<T>) -> Option<T> {
    let mut cursor = view.cursor();
    let mut latest = None;
    while cursor.has_more() {
        let Ok(value) = cursor.pull() else { break };
        latest = Some(value);
    }
    latest
}

/// Splits a view into the (pass, fail) pair of lazy views for `predicate`.
///
/// The two views are independent filter/reject adapters over the same
/// upstream description: each materialization re-evaluates the predicate,
/// a deliberate simplicity-over-sharing tradeoff.
pub fn partition<T: 'static>(view: &View<T>, predicate: impl Fn(&T) -> bool + 'static) -> (View<T>, View<T>) {
    let predicate = Rc::new(predicate);
    let accepted = {
        let predicate = Rc::clone(&predicate);
        view.filter(move |value| predicate(value))
    };
    let rejected = view.reject(move |value| predicate(value));
    (accepted, rejected)
}

/// Drains the view, invoking `effect` for every element.
pub fn each<T: 'static>(view: &View<T>, effect: impl Fn(&T) + 'static) {
    let mut cursor = view.each(effect).cursor();
    while cursor.has_more() {
        if cursor.pull().is_err() {
            break;
        }
    }
}
