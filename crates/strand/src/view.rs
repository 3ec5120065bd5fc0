//! Re-usable sequence descriptions that manufacture fresh cursors on demand.
//!
//! A [`View`] is an immutable cursor factory: adapter methods return new
//! Views without consuming the upstream, and every traversal request builds
//! a fresh cursor chain. Re-traversing a View sees the full sequence again
//! *provided the upstream source itself is re-iterable*; a View over a
//! single-pass generator source makes repeated traversal undefined — that
//! is a contract requirement on callers, not something the engine papers
//! over.

use std::rc::Rc;

use crate::{
    cursor::{BoxCursor, EffectFn, PredicateFn, TransformFn},
    cursors::{
        ChainedCursor, ComprehensionCursor, CountingCursor, CyclicCursor, MappedCursor, PairZipCursor,
        SnapshotCursor, SubsequenceCursor, TapCursor, ZippedCursor,
    },
    row::Row,
    window::Window,
};

/// An immutable, re-usable description of a sequence.
///
/// Stateless itself; cloning shares the underlying factory. Dropped like any
/// value when no longer referenced.
pub struct View<T> {
    make: Rc<dyn Fn() -> BoxCursor<T>>,
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            make: Rc::clone(&self.make),
        }
    }
}

impl<T: 'static> View<T> {
    /// Wraps an arbitrary cursor factory as a view.
    ///
    /// The factory is invoked once per traversal. Factories over single-pass
    /// state (channels, consumed readers) produce views whose re-traversal
    /// is undefined.
    pub fn generate(make: impl Fn() -> BoxCursor<T> + 'static) -> Self {
        Self { make: Rc::new(make) }
    }

    /// A re-iterable view over a snapshot of the given values.
    #[must_use]
    pub fn from_values(values: Vec<T>) -> Self
    where
        T: Clone,
    {
        let values = Rc::new(values);
        Self::generate(move || Box::new(SnapshotCursor::new(Rc::clone(&values))))
    }

    /// A view over no elements.
    #[must_use]
    pub fn empty() -> Self
    where
        T: Clone,
    {
        Self::from_values(Vec::new())
    }

    /// Manufactures a fresh cursor positioned at the start of the sequence.
    #[must_use]
    pub fn cursor(&self) -> BoxCursor<T> {
        (self.make)()
    }

    /// Lazily applies a transform per element.
    #[must_use]
    pub fn map<U: 'static>(&self, transform: impl Fn(T) -> U + 'static) -> View<U> {
        let upstream = self.clone();
        let transform: TransformFn<T, U> = Rc::new(transform);
        View::generate(move || Box::new(MappedCursor::new(upstream.cursor(), Rc::clone(&transform))))
    }

    /// Lazily fuses a conjunction of predicates with a transform in one pass.
    ///
    /// Zero predicates degenerates to an unconditional map.
    #[must_use]
    pub fn comprehension<U: 'static>(&self, transform: TransformFn<T, U>, predicates: Vec<PredicateFn<T>>) -> View<U> {
        let upstream = self.clone();
        View::generate(move || {
            Box::new(ComprehensionCursor::new(
                upstream.cursor(),
                Rc::clone(&transform),
                predicates.clone(),
            ))
        })
    }

    /// Lazily keeps the elements accepted by `predicate`.
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        let identity: TransformFn<T, T> = Rc::new(|value| value);
        let predicates: Vec<PredicateFn<T>> = vec![Rc::new(predicate)];
        self.comprehension(identity, predicates)
    }

    /// Lazily keeps the elements rejected by `predicate`.
    #[must_use]
    pub fn reject(&self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        let identity: TransformFn<T, T> = Rc::new(|value| value);
        let predicates: Vec<PredicateFn<T>> = vec![Rc::new(move |value: &T| !predicate(value))];
        self.comprehension(identity, predicates)
    }

    /// Lazily forwards elements while invoking a side effect per element.
    #[must_use]
    pub fn each(&self, effect: impl Fn(&T) + 'static) -> Self {
        let upstream = self.clone();
        let effect: EffectFn<T> = Rc::new(effect);
        Self::generate(move || Box::new(TapCursor::new(upstream.cursor(), Rc::clone(&effect))))
    }

    /// Lazily appends `other` after this view's elements.
    #[must_use]
    pub fn chain(&self, other: &Self) -> Self {
        Self::chain_all(vec![self.clone(), other.clone()])
    }

    /// Lazily flattens a sequence of views into one.
    #[must_use]
    pub fn chain_all(views: Vec<Self>) -> Self {
        let views = Rc::new(views);
        Self::generate(move || {
            let outer_views: BoxCursor<Self> = Box::new(SnapshotCursor::new(Rc::clone(&views)));
            let outer: BoxCursor<BoxCursor<T>> =
                Box::new(MappedCursor::new(outer_views, Rc::new(|view: Self| view.cursor())));
            Box::new(ChainedCursor::new(outer))
        })
    }

    /// Lazily repeats this view `limit` times, or forever with `None`.
    ///
    /// A limit of `Some(0)` is immediately exhausted. Elements are memoized
    /// during the first pass so even a single-pass upstream cycles.
    #[must_use]
    pub fn cycle(&self, limit: Option<usize>) -> Self
    where
        T: Clone,
    {
        let upstream = self.clone();
        Self::generate(move || Box::new(CyclicCursor::new(upstream.cursor(), limit)))
    }

    /// Lazily applies a start/stop/step window.
    #[must_use]
    pub fn subsequence(&self, window: Window) -> Self {
        let upstream = self.clone();
        Self::generate(move || Box::new(SubsequenceCursor::new(upstream.cursor(), window)))
    }

    /// Lazily keeps the first `n` elements.
    #[must_use]
    pub fn take(&self, n: usize) -> Self {
        self.subsequence(Window::first(n))
    }

    /// Lazily discards the first `n` elements.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        self.subsequence(Window::after(n))
    }

    /// Lazily zips this view with another in lock-step, shortest-wins.
    #[must_use]
    pub fn zip<U: 'static>(&self, other: &View<U>) -> View<(T, U)> {
        let left = self.clone();
        let right = other.clone();
        View::generate(move || Box::new(PairZipCursor::new(left.cursor(), right.cursor())))
    }

    /// Lazily zips N same-typed views in lock-step, yielding arity-N rows.
    #[must_use]
    pub fn zip_all(views: Vec<Self>) -> View<Row<T>> {
        let views = Rc::new(views);
        View::generate(move || {
            let sources = views.iter().map(Self::cursor).collect();
            Box::new(ZippedCursor::new(sources))
        })
    }
}

impl View<i64> {
    /// An unbounded arithmetic view: start, start + step, start + 2*step, …
    ///
    /// Never exhausts; bound consumption with [`View::take`] or a windowed
    /// subsequence.
    #[must_use]
    pub fn counting(start: i64, step: i64) -> Self {
        Self::generate(move || Box::new(CountingCursor::new(start, step)))
    }
}
