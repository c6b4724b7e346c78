//! Top-down balanced merge sort driven by an external [`Comparator`].
//!
//! Partition rule: the left half is the first `len / 2` elements in input
//! order, the right half is the rest. The merge takes from the right half
//! only when the left head compares `Greater`, so elements that compare
//! `Equal` come out in input order and the sort is stable.
//!
//! O(n log n) comparisons, O(n) auxiliary space per merge level, O(log n)
//! recursion depth. The input vector is consumed; elements are moved, never
//! cloned or dropped, so the output is a permutation of the input even if
//! the comparator violates its total-order precondition.

use std::cmp::Ordering;

use crate::comparator::{self, Comparator};

/// Sorts `xs` into non-decreasing natural order, returning a new vector.
pub fn sort<T: Ord>(xs: Vec<T>) -> Vec<T> {
    sort_with(xs, &comparator::natural())
}

/// Sorts `xs` by an ad-hoc comparison function.
pub fn sort_by<T, F>(xs: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_with(xs, &comparator::from_fn(compare))
}

/// Sorts `xs` by the supplied comparison strategy.
///
/// The comparator must satisfy the total-order precondition documented on
/// [`Comparator`]; the returned vector is a sorted permutation of `xs`.
pub fn sort_with<T, C>(xs: Vec<T>, cmp: &C) -> Vec<T>
where
    C: Comparator<T> + ?Sized,
{
    if xs.len() <= 1 {
        return xs;
    }

    let mut left = xs;
    let right = left.split_off(left.len() / 2);

    merge(sort_with(left, cmp), sort_with(right, cmp), cmp)
}

fn merge<T, C>(mut left: Vec<T>, mut right: Vec<T>, cmp: &C) -> Vec<T>
where
    C: Comparator<T> + ?Sized,
{
    // Halves already ordered across the boundary, concatenation keeps equal
    // elements in left-first order.
    if let (Some(left_last), Some(right_first)) = (left.last(), right.first()) {
        if cmp.compare(left_last, right_first) != Ordering::Greater {
            left.append(&mut right);
            return left;
        }
    }

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left_iter = left.into_iter().peekable();
    let mut right_iter = right.into_iter().peekable();

    loop {
        let take_right = match (left_iter.peek(), right_iter.peek()) {
            // Equal heads take from the left half. Together with the
            // in-order partition this is what makes the sort stable.
            (Some(l), Some(r)) => cmp.compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };

        if take_right {
            merged.extend(right_iter.next());
        } else {
            merged.extend(left_iter.next());
        }
    }

    merged
}
