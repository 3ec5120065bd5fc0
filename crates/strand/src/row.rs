//! The arity-N ordered product type produced by lock-step zipping.
//!
//! The engine only needs two capabilities from a product: construct it from
//! ordered values and iterate the values back out in order. There is no
//! labeling and no per-position typing; the typed two-source zip yields
//! plain tuples instead.

use smallvec::SmallVec;

/// An ordered product of N same-typed values.
///
/// Backed by a `SmallVec` so the common small arities stay inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row<T>(SmallVec<[T; 4]>);

impl<T> Row<T> {
    /// Constructs a row from ordered values.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        Self(values.into_iter().collect())
    }

    /// The arity of the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the row has arity zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value at `index`, if within arity.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Iterates the values in construction order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Consumes the row, yielding the values in construction order.
    pub fn into_values(self) -> impl Iterator<Item = T> {
        self.0.into_iter()
    }
}

impl<T> FromIterator<T> for Row<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> IntoIterator for Row<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
