//! Comparator-driven stable merge sort.
//!
//! The sort core in [`merge_sort`] is generic over the element type and an
//! externally supplied [`Comparator`] value. Orderings are swapped by
//! passing a different comparator, never by touching the sort itself, and
//! comparators for composite types are built by composing comparators for
//! their components.
//!
//! ```
//! use strategy_sort::comparator::{self, Comparator};
//! use strategy_sort::merge_sort;
//!
//! let descending = comparator::natural::<i32>().reversed();
//! let sorted = merge_sort::sort_with(vec![1, 5, -2, 12], &descending);
//! assert_eq!(sorted, vec![12, 5, 1, -2]);
//! ```

pub mod comparator;
pub mod merge_sort;
pub mod patterns;

pub use comparator::Comparator;
pub use merge_sort::{sort, sort_by, sort_with};
