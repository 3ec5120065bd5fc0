//! Sub-sequence windows and the index-resolution arithmetic for eager slicing.
//!
//! Two related but distinct pieces live here:
//!
//! - [`Window`]: the validated start/stop/step triple consumed by the lazy
//!   subsequence cursor. Absent components are null-sentinel `None`s; the
//!   present ones must satisfy `start >= 0`, `stop >= 0`, `step >= 1`, and
//!   not both given with stop before start.
//! - The index resolution used by the *eager* slice operation over a finite,
//!   already-materialized sequence. This is independent arithmetic, not a
//!   cursor: it maps possibly-negative, possibly-absent start/stop/step onto
//!   concrete positions, including the clamp asymmetry (start clamps to
//!   `length - 1`, stop clamps to `length`) and the wraparound walk when the
//!   resolved start lies past the resolved stop. The asymmetry is load-bearing
//!   for compatibility; do not "fix" it without updating the tests below.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, TraverseResult};

/// A validated start/stop/step window for lazy sub-sequencing.
///
/// Plain serializable data; `None` components take their defaults at
/// traversal time (start 0, unbounded stop, step 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    start: Option<usize>,
    stop: Option<usize>,
    step: Option<usize>,
}

impl Window {
    /// Creates a window from possibly-absent signed components.
    ///
    /// Fails with an invalid-argument error for a negative start or stop,
    /// a step below 1, or a stop before a given start.
    pub fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> TraverseResult<Self> {
        let start = match start {
            Some(s) if s < 0 => return Err(EngineError::invalid_argument("window start must not be negative")),
            Some(s) => Some(usize::try_from(s).expect("non-negative i64 fits usize")),
            None => None,
        };
        let stop = match stop {
            Some(s) if s < 0 => return Err(EngineError::invalid_argument("window stop must not be negative")),
            Some(s) => Some(usize::try_from(s).expect("non-negative i64 fits usize")),
            None => None,
        };
        let step = match step {
            Some(s) if s < 1 => return Err(EngineError::invalid_argument("window step must be at least 1")),
            Some(s) => Some(usize::try_from(s).expect("positive i64 fits usize")),
            None => None,
        };
        if let (Some(start), Some(stop)) = (start, stop)
            && stop < start
        {
            return Err(EngineError::invalid_argument("window stop must not precede start"));
        }
        Ok(Self { start, stop, step })
    }

    /// A window that keeps the first `n` elements.
    #[must_use]
    pub fn first(n: usize) -> Self {
        Self {
            start: None,
            stop: Some(n),
            step: None,
        }
    }

    /// A window that discards the first `n` elements.
    #[must_use]
    pub fn after(n: usize) -> Self {
        Self {
            start: Some(n),
            stop: None,
            step: None,
        }
    }

    /// The effective start: 0 when absent.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start.unwrap_or(0)
    }

    /// The stop bound, unbounded when absent.
    #[must_use]
    pub fn stop(&self) -> Option<usize> {
        self.stop
    }

    /// The effective step: 1 when absent.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step.unwrap_or(1)
    }
}

/// Resolves a possibly-absent, possibly-negative slice start against a length.
///
/// Absent or `start + length < 0` resolves to 0; a negative start counts back
/// from the end; a start past the end clamps to `length - 1` (NOT `length`;
/// the asymmetry with [`resolve_stop`] is deliberate, see the module docs).
#[must_use]
pub fn resolve_start(start: Option<i64>, length: usize) -> i64 {
    let length = length_i64(length);
    match start {
        None => 0,
        // Clamp the high side first so `s + length` below cannot overflow.
        Some(s) if s > length => length - 1,
        Some(s) if s + length < 0 => 0,
        Some(s) if s < 0 => s + length,
        Some(s) => s,
    }
}

/// Resolves a possibly-absent, possibly-negative slice stop against a length.
///
/// Absent or `stop > length` resolves to `length`; `stop + length < 0`
/// resolves to -1; a negative stop counts back from the end.
#[must_use]
pub fn resolve_stop(stop: Option<i64>, length: usize) -> i64 {
    let length = length_i64(length);
    match stop {
        None => length,
        Some(s) if s > length => length,
        Some(s) if s + length < 0 => -1,
        Some(s) if s < 0 => s + length,
        Some(s) => s,
    }
}

/// Resolves a possibly-absent slice step.
///
/// Absent resolves to 1; zero fails with an invalid-argument error; any other
/// value passes through (negative steps walk the resolved range in reverse).
pub fn resolve_step(step: Option<i64>) -> TraverseResult<i64> {
    match step {
        None => Ok(1),
        Some(0) => Err(EngineError::invalid_argument("slice step must not be zero")),
        Some(s) => Ok(s),
    }
}

/// Produces the positions visited by an eager slice over a sequence of
/// `length` elements, given already-resolved start/stop/step.
///
/// - step > 0, start <= stop: ascending from start, strided, below stop.
/// - step > 0, start > stop: the documented wraparound — positions descend
///   from `stop - 1`, wrapping below 0 to `length - 1`, across the
///   `length - start + stop` positions between the two bounds, with the
///   stride applied to that walk.
/// - step < 0: descending from `stop - 1` down to start inclusive, with
///   stride `|step|` (so an absent start/stop with step -1 reverses the
///   sequence).
#[must_use]
pub fn slice_positions(start: i64, stop: i64, step: i64, length: usize) -> Vec<usize> {
    if length == 0 {
        return Vec::new();
    }
    let len = length_i64(length);
    let mut positions = Vec::new();
    if step > 0 && start <= stop {
        let mut i = start.max(0);
        while i < stop {
            positions.push(usize::try_from(i).expect("checked non-negative"));
            i += step;
        }
    } else if step > 0 {
        // start > stop: wraparound walk, descending from just below stop.
        let span = len - start + stop;
        let mut offset = 0;
        while offset < span {
            let idx = (stop - 1 - offset).rem_euclid(len);
            positions.push(usize::try_from(idx).expect("rem_euclid is non-negative"));
            offset += step;
        }
    } else {
        let mut i = stop - 1;
        while i >= start && i >= 0 {
            positions.push(usize::try_from(i).expect("checked non-negative"));
            i += step;
        }
    }
    positions
}

/// Applies full resolution plus the walk to pick elements out of a slice.
pub fn slice_values<T: Clone>(
    values: &[T],
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> TraverseResult<Vec<T>> {
    let resolved_step = resolve_step(step)?;
    let resolved_start = resolve_start(start, values.len());
    let resolved_stop = resolve_stop(stop, values.len());
    let positions = slice_positions(resolved_start, resolved_stop, resolved_step, values.len());
    Ok(positions.into_iter().map(|i| values[i].clone()).collect())
}

fn length_i64(length: usize) -> i64 {
    i64::try_from(length).expect("sequence length fits i64")
}
