use std::cmp::Ordering;
use std::marker::PhantomData;

/// A total-order comparison strategy over `T`.
///
/// Implementations must induce a total order: for any `a` and `b` exactly
/// one of `Less`, `Equal` and `Greater` is returned, the relation is
/// antisymmetric and transitive, and repeated calls with the same arguments
/// return the same result. This is a precondition of the sort, not a
/// runtime-checked property; a comparator that violates it produces an
/// unspecified permutation of the input, nothing worse.
///
/// Comparators are plain values passed explicitly at the call site. There
/// is no registry or implicit per-type resolution.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Flips this comparator's order.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }

    /// Consults `other` only when `self` considers two elements equal.
    fn then<C>(self, other: C) -> Then<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        Then(self, other)
    }
}

/// The order `T` defines for itself via [`Ord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural<T> {
    _marker: PhantomData<T>,
}

pub fn natural<T: Ord>() -> Natural<T> {
    Natural {
        _marker: PhantomData,
    }
}

impl<T: Ord> Comparator<T> for Natural<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a plain comparison function into a [`Comparator`] value.
#[derive(Debug, Clone, Copy)]
pub struct FnCmp<F>(F);

pub fn from_fn<T, F>(compare: F) -> FnCmp<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    FnCmp(compare)
}

impl<T, F> Comparator<T> for FnCmp<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Compares elements by a projected key's natural order.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(F);

pub fn by_key<T, K, F>(key: F) -> ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    ByKey(key)
}

impl<T, K, F> Comparator<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// See [`Comparator::reversed`].
#[derive(Debug, Clone, Copy)]
pub struct Reversed<C>(C);

impl<T, C> Comparator<T> for Reversed<C>
where
    C: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// See [`Comparator::then`].
#[derive(Debug, Clone, Copy)]
pub struct Then<C1, C2>(C1, C2);

impl<T, C1, C2> Comparator<T> for Then<C1, C2>
where
    C1: Comparator<T>,
    C2: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.0.compare(a, b) {
            Ordering::Equal => self.1.compare(a, b),
            decided => decided,
        }
    }
}

/// A comparator over pairs built from per-component comparators: first
/// components are compared first, ties fall through to the second. N-ary
/// tuples and records compose by nesting pairs, or by chaining
/// [`by_key`] projections with [`Comparator::then`].
#[derive(Debug, Clone, Copy)]
pub struct Lexicographic<CA, CB>(CA, CB);

pub fn lexicographic<A, B, CA, CB>(first: CA, second: CB) -> Lexicographic<CA, CB>
where
    CA: Comparator<A>,
    CB: Comparator<B>,
{
    Lexicographic(first, second)
}

impl<A, B, CA, CB> Comparator<(A, B)> for Lexicographic<CA, CB>
where
    CA: Comparator<A>,
    CB: Comparator<B>,
{
    fn compare(&self, a: &(A, B), b: &(A, B)) -> Ordering {
        match self.0.compare(&a.0, &b.0) {
            Ordering::Equal => self.1.compare(&a.1, &b.1),
            decided => decided,
        }
    }
}
