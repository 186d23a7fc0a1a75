//! Equality strategies injected into the engine
//!
//! The engine never compares elements directly. It asks an [`Equivalence`]
//! for a hashable identity (used to build the B index) and for pairwise
//! equality (used when extending a match past indexed positions).

use std::hash::Hash;

/// Strategy deciding when two elements count as equal.
///
/// `equivalent(x, y)` must agree with `key(x) == key(y)`.
pub trait Equivalence<'a, T: 'a> {
    /// Hashable identity of an element
    type Key: Eq + Hash;

    /// Identity used as the index key for `item`
    fn key(&self, item: &'a T) -> Self::Key;

    /// Whether `x` and `y` are interchangeable for alignment purposes
    fn equivalent(&self, x: &'a T, y: &'a T) -> bool {
        self.key(x) == self.key(y)
    }
}

/// Elements are compared by value.
///
/// Keys borrow the elements, so building the index never clones them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByValue;

impl<'a, T> Equivalence<'a, T> for ByValue
where
    T: Eq + Hash + 'a,
{
    type Key = &'a T;

    fn key(&self, item: &'a T) -> &'a T {
        item
    }

    fn equivalent(&self, x: &'a T, y: &'a T) -> bool {
        x == y
    }
}

/// Elements are compared by a caller-supplied key function.
///
/// Only the key decides equality; the rest of each element is ignored.
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    key_fn: F,
}

impl<F> ByKey<F> {
    pub fn new(key_fn: F) -> Self {
        Self { key_fn }
    }
}

impl<F> std::fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<'a, T, K, F> Equivalence<'a, T> for ByKey<F>
where
    T: 'a,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    type Key = K;

    fn key(&self, item: &'a T) -> K {
        (self.key_fn)(item)
    }
}
