//! Positions in an [`OrderedTree`] that step through it in key order.
//!
//! A [`Cursor`] is either at a node or at the *end sentinel*. Stepping forward
//! from the largest key lands on the end, and stepping forward from the end
//! wraps around to the smallest key (backwards works the same way, mirrored).
//! Cursors never panic while stepping, they just go round.
//!
//! Each step follows child and parent links, so a cursor takes no extra space
//! no matter how deep the tree is.
//!
//! # Examples
//!
//! ```
//! use ordtree::OrderedTree;
//!
//! let tree: OrderedTree<_, _> = vec![(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
//!
//! let mut cursor = tree.begin();
//! let mut seen = Vec::new();
//! while cursor != tree.end() {
//!     seen.push(*cursor.value().unwrap());
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec!['a', 'b', 'c']);
//!
//! // One more step wraps back to the start.
//! assert_eq!(cursor.advance(), Some((&1, &'a')));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::arena::NodeId;
use crate::compare::NaturalOrder;
use crate::error::{Error, Result};
use crate::node::NodeRef;
use crate::tree::OrderedTree;

/// A bidirectional position in an [`OrderedTree`].
///
/// Made by [`begin`][OrderedTree::begin], [`begin_at`][OrderedTree::begin_at],
/// [`rbegin`][OrderedTree::rbegin] and [`end`][OrderedTree::end]. The cursor
/// borrows the tree, so the tree can't be modified while the cursor exists.
pub struct Cursor<'a, K, V, C = NaturalOrder> {
    tree: &'a OrderedTree<K, V, C>,
    position: Option<NodeId>,
}

impl<'a, K, V, C> Clone for Cursor<'a, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, K, V, C> Copy for Cursor<'a, K, V, C> {}

/// Cursors are equal when they sit on the same node of the same tree, or are
/// both at the end of the same tree.
impl<'a, K, V, C> PartialEq for Cursor<'a, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.position == other.position
    }
}
impl<'a, K, V, C> Eq for Cursor<'a, K, V, C> {}

impl<'a, K, V, C> fmt::Debug for Cursor<'a, K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some((key, value)) => f.debug_tuple("Cursor").field(key).field(value).finish(),
            None => f.write_str("Cursor(End)"),
        }
    }
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    pub(crate) fn new(tree: &'a OrderedTree<K, V, C>, position: Option<NodeId>) -> Self {
        Self { tree, position }
    }

    /// Whether the cursor is at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// The key and value under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        self.node().map(|node| node.entry())
    }

    /// Like [`get`][Self::get], but treats the end as an error for callers
    /// that consider dereferencing it a bug.
    pub fn try_get(&self) -> Result<(&'a K, &'a V)> {
        self.get().ok_or(Error::EndOfTree)
    }

    /// The key under the cursor.
    pub fn key(&self) -> Option<&'a K> {
        self.node().map(|node| node.key())
    }

    /// The value under the cursor.
    pub fn value(&self) -> Option<&'a V> {
        self.node().map(|node| node.value())
    }

    /// A view of the node under the cursor.
    pub fn node(&self) -> Option<NodeRef<'a, K, V>> {
        let tree = self.tree;
        self.position.map(|id| NodeRef::new(tree.arena(), id))
    }

    /// Moves to the next key and returns its entry (pre-increment).
    ///
    /// From the largest key this moves to the end; from the end it moves to
    /// the smallest key.
    pub fn advance(&mut self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        self.position = match self.position {
            Some(id) => tree.successor(id),
            None => tree.root_id().map(|root| tree.leftmost(root)),
        };
        self.get()
    }

    /// Moves to the next key and returns where the cursor was before moving
    /// (post-increment).
    pub fn post_advance(&mut self) -> Self {
        let before = *self;
        self.advance();
        before
    }

    /// Moves to the previous key and returns its entry (pre-decrement).
    ///
    /// From the smallest key this moves to the end; from the end it moves to
    /// the largest key.
    pub fn retreat(&mut self) -> Option<(&'a K, &'a V)> {
        let tree = self.tree;
        self.position = match self.position {
            Some(id) => tree.predecessor(id),
            None => tree.root_id().map(|root| tree.rightmost(root)),
        };
        self.get()
    }

    /// Moves to the previous key and returns where the cursor was before
    /// moving (post-decrement).
    pub fn post_retreat(&mut self) -> Self {
        let before = *self;
        self.retreat();
        before
    }
}

/// An iterator over the entries of an [`OrderedTree`] in key order.
///
/// Made by [`OrderedTree::iter`]. Unlike a bare [`Cursor`] it stops instead of
/// wrapping around, and it can be consumed from both ends.
pub struct Iter<'a, K, V, C = NaturalOrder> {
    front: Cursor<'a, K, V, C>,
    back: Cursor<'a, K, V, C>,
    remaining: usize,
}

impl<'a, K, V, C> Clone for Iter<'a, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V, C> fmt::Debug for Iter<'a, K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, C> Iter<'a, K, V, C> {
    pub(crate) fn new(tree: &'a OrderedTree<K, V, C>) -> Self {
        Self {
            front: tree.begin(),
            back: tree.rbegin(),
            remaining: tree.len(),
        }
    }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.front.post_advance().get()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V, C> DoubleEndedIterator for Iter<'a, K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.back.post_retreat().get()
    }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C> {}

impl<'a, K, V, C> FusedIterator for Iter<'a, K, V, C> {}
