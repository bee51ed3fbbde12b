//! The total order a tree sorts its keys by.
//!
//! Trees don't require `K: Ord`. Instead every [`OrderedTree`][crate::OrderedTree]
//! carries a [`Comparator`], which defaults to [`NaturalOrder`]. Any closure
//! `Fn(&K, &K) -> Ordering` is a comparator too, which is handy for keys like
//! `f64`:
//!
//! ```
//! use ordtree::OrderedTree;
//!
//! let mut tree = OrderedTree::with_comparator(|a: &f64, b: &f64| a.total_cmp(b));
//! tree.insert(2.5, "b");
//! tree.insert(-1.0, "a");
//!
//! assert_eq!(tree.first(), Some((&-1.0, &"a")));
//! ```

use std::cmp::Ordering;

/// A total order over `K`.
///
/// Implementations must be consistent: the tree's search order is only as
/// good as the comparator's transitivity.
pub trait Comparator<K: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K> Comparator<K> for NaturalOrder
where
    K: Ord + ?Sized,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation, so iteration
/// runs from the largest key to the smallest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<K> Comparator<K> for ReverseOrder
where
    K: Ord + ?Sized,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
