//! The [`OrderedTree`] container: insertion, lookup, mutation and deletion.
//!
//! # Examples
//!
//! ```
//! use ordtree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.has(&1));
//!
//! tree.insert(1, "one");
//! assert_eq!(tree.find(&1), Some(&"one"));
//!
//! // Values are changed in place.
//! assert!(tree.change(&1, "uno"));
//! assert_eq!(tree.find(&1), Some(&"uno"));
//!
//! // Deleting reports whether anything was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::arena::{Arena, Node, NodeId};
use crate::compare::{Comparator, NaturalOrder};
use crate::config::{Config, Walk};
use crate::cursor::{Cursor, Iter};
use crate::node::NodeRef;

/// Which child slot of a parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// An unbalanced Binary Search Tree keyed by a caller-supplied total order.
///
/// Nodes live in an arena owned by the tree and point at their children and
/// their parent by index. The parent links let a [`Cursor`] step to the
/// in-order successor or predecessor without keeping a stack.
///
/// Keys that compare less than a node go into its left subtree; everything
/// else, *including equal keys*, goes right. Duplicates are kept, but the
/// key-based operations ([`has`][Self::has], [`find`][Self::find],
/// [`change`][Self::change], [`delete`][Self::delete]) only ever reach the
/// first one on the search path.
pub struct OrderedTree<K, V, C = NaturalOrder> {
    arena: Arena<K, V>,
    root: Option<NodeId>,
    cmp: C,
    config: Config,
}

impl<K, V> Default for OrderedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Drop for OrderedTree<K, V, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V, C> Clone for OrderedTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        // Ids are slot indices so the cloned arena links up unchanged.
        Self {
            arena: self.arena.clone(),
            root: self.root,
            cmp: self.cmp.clone(),
            config: self.config,
        }
    }
}

impl<K, V, C> fmt::Debug for OrderedTree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> OrderedTree<K, V> {
    /// Generates a new, empty `Tree` ordered by `K`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Generates a new, empty `Tree` with the given settings.
    pub fn with_config(config: Config) -> Self {
        Self::with_comparator_and_config(NaturalOrder, config)
    }
}

impl<K, V, C> OrderedTree<K, V, C> {
    /// Generates a new, empty `Tree` ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_comparator_and_config(cmp, Config::default())
    }

    /// Generates a new, empty `Tree` ordered by `cmp` with the given settings.
    pub fn with_comparator_and_config(cmp: C, config: Config) -> Self {
        Self {
            arena: Arena::with_capacity(config.capacity),
            root: None,
            cmp,
            config,
        }
    }

    /// The settings this tree was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// The number of nodes in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every node. Children are dropped before their parents.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            match self.config.walk {
                Walk::Recursive => self.release_subtree(root),
                Walk::Iterative => {
                    let mut stack = vec![root];
                    while let Some(&id) = stack.last() {
                        let node = self.arena.get_mut(id);
                        if let Some(left) = node.left.take() {
                            stack.push(left);
                        } else if let Some(right) = node.right.take() {
                            stack.push(right);
                        } else {
                            stack.pop();
                            self.arena.release(id);
                        }
                    }
                }
            }
        }
        self.arena.reset();
    }

    fn release_subtree(&mut self, id: NodeId) {
        let node = self.arena.get(id);
        let (left, right) = (node.left, node.right);
        if let Some(left) = left {
            self.release_subtree(left);
        }
        if let Some(right) = right {
            self.release_subtree(right);
        }
        self.arena.release(id);
    }

    /// A cursor at the node with the smallest key, or at [`end`][Self::end] if
    /// the tree is empty.
    pub fn begin(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self, self.root.map(|root| self.leftmost(root)))
    }

    /// A cursor [`begin`][Self::begin] advanced `offset` times. Stops at
    /// [`end`][Self::end] if the tree runs out first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let tree: OrderedTree<_, _> = (0..5).map(|k| (k, k * 10)).collect();
    ///
    /// assert_eq!(tree.begin_at(3).get(), Some((&3, &30)));
    /// assert_eq!(tree.begin_at(7), tree.end());
    /// ```
    pub fn begin_at(&self, offset: usize) -> Cursor<'_, K, V, C> {
        let mut cursor = self.begin();
        let end = self.end();
        let mut i = 0;
        while i < offset && cursor != end {
            cursor.advance();
            i += 1;
        }
        cursor
    }

    /// A cursor at the node with the largest key, or at [`end`][Self::end] if
    /// the tree is empty.
    ///
    /// This is *not* a reverse iterator: [`advance`][Cursor::advance] from
    /// here moves to `end`, [`retreat`][Cursor::retreat] walks backwards.
    pub fn rbegin(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self, self.root.map(|root| self.rightmost(root)))
    }

    /// The end sentinel. Only useful for comparing against other cursors.
    pub fn end(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self, None)
    }

    /// Iterates over the entries in key order. The iterator is double ended.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter::new(self)
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.begin().get()
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.rbegin().get()
    }

    pub(crate) fn arena(&self) -> &Arena<K, V> {
        &self.arena
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    /// Follows left children from `id` as far as they go.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.arena.get(id).left {
            id = left;
        }
        id
    }

    /// Follows right children from `id` as far as they go.
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.arena.get(id).right {
            id = right;
        }
        id
    }

    /// The next node in key order, found through child and parent links.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.arena.get(id).right {
            return Some(self.leftmost(right));
        }
        let mut current = id;
        let mut parent = self.arena.get(current).parent;
        while let Some(p) = parent {
            let parent_node = self.arena.get(p);
            if parent_node.left == Some(current) {
                break;
            }
            current = p;
            parent = parent_node.parent;
        }
        parent
    }

    /// The previous node in key order. Mirror image of `successor`.
    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.arena.get(id).left {
            return Some(self.rightmost(left));
        }
        let mut current = id;
        let mut parent = self.arena.get(current).parent;
        while let Some(p) = parent {
            let parent_node = self.arena.get(p);
            if parent_node.right == Some(current) {
                break;
            }
            current = p;
            parent = parent_node.parent;
        }
        parent
    }

    /// Detaches `id` from the tree, putting `replacement` (one of `id`'s
    /// children, or nothing) in its place, and returns the removed node.
    ///
    /// `id` must have at most one child and `replacement` must be that child.
    fn splice_out(&mut self, id: NodeId, replacement: Option<NodeId>) -> Node<K, V> {
        let parent = self.arena.get(id).parent;
        match parent {
            None => self.root = replacement,
            Some(p) => {
                let side = self.side_of(p, id);
                self.set_child(p, side, replacement);
            }
        }
        if let Some(child) = replacement {
            self.arena.get_mut(child).parent = parent;
        }
        let removed = self.arena.release(id);

        if cfg!(debug_assertions) {
            if let Some(child) = replacement {
                self.assert_links(child);
            }
        }
        removed
    }

    fn side_of(&self, parent: NodeId, child: NodeId) -> Side {
        if self.arena.get(parent).left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.arena.get(parent).right, Some(child));
            Side::Right
        }
    }

    fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        let parent_node = self.arena.get_mut(parent);
        match side {
            Side::Left => parent_node.left = child,
            Side::Right => parent_node.right = child,
        }
    }

    /// Checks the links touching `id` agree with each other.
    fn assert_links(&self, id: NodeId) {
        let node = self.arena.get(id);
        match node.parent {
            Some(parent) => {
                let parent_node = self.arena.get(parent);
                assert!(
                    parent_node.left == Some(id) || parent_node.right == Some(id),
                    "node {:?} is not a child of its parent {:?}",
                    id,
                    parent
                );
            }
            None => assert_eq!(self.root, Some(id), "parentless node {:?} is not the root", id),
        }
        for child in node.left.iter().chain(node.right.iter()) {
            assert_eq!(
                self.arena.get(*child).parent,
                Some(id),
                "child {:?} does not point back at {:?}",
                child,
                id
            );
        }
    }
}

impl<K, V, C> OrderedTree<K, V, C>
where
    C: Comparator<K>,
{
    /// Inserts the given value into the tree under the given key.
    ///
    /// Inserting a key that is already present does **not** overwrite it: the
    /// new node goes into the right subtree of the existing one. Use
    /// [`change`][Self::change] to overwrite.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, 'a');
    /// tree.insert(1, 'b');
    ///
    /// assert_eq!(tree.len(), 2);
    /// // Lookups stop at the first match.
    /// assert_eq!(tree.find(&1), Some(&'a'));
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.arena.alloc(Node::new(key, value, None)));
                return;
            }
        };

        let (parent, side) = loop {
            let node = self.arena.get(current);
            let side = match self.cmp.compare(&key, &node.key) {
                Ordering::Less => Side::Left,
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            let next = match side {
                Side::Left => node.left,
                Side::Right => node.right,
            };
            match next {
                Some(next) => current = next,
                None => break (current, side),
            }
        };

        let id = self.arena.alloc(Node::new(key, value, Some(parent)));
        self.set_child(parent, side, Some(id));

        if cfg!(debug_assertions) {
            self.assert_links(id);
        }
    }

    /// Walks down from the root to the first node whose key compares equal.
    fn search(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.arena.get(id);
            current = match self.cmp.compare(key, &node.key) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Whether a node with the given key is in the tree.
    pub fn has(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Potentially finds the value associated with the given key in this tree.
    /// If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V> {
        self.search(key).map(|id| &self.arena.get(id).value)
    }

    /// A read-only view of the node holding the given key.
    pub fn find_node(&self, key: &K) -> Option<NodeRef<'_, K, V>> {
        self.search(key).map(|id| NodeRef::new(&self.arena, id))
    }

    /// Overwrites the value stored under `key`. Returns `false`, dropping
    /// `value`, if there is no such key.
    pub fn change(&mut self, key: &K, value: V) -> bool {
        match self.search(key) {
            Some(id) => {
                self.arena.get_mut(id).value = value;
                true
            }
            None => false,
        }
    }

    /// Deletes the node containing the given key. Returns `false`, leaving the
    /// tree untouched, if there is no such key.
    ///
    /// A node with two children is not unlinked itself: it takes over the key
    /// and value of its in-order successor, and the successor's slot is
    /// removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Order, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// for key in vec![5, 2, 7, 6, 10] {
    ///     tree.insert(key, ());
    /// }
    ///
    /// assert!(tree.delete(&5));
    /// // 6 moved up into the old root.
    /// assert_eq!(tree.traverse(Order::PreOrder).next(), Some((&6, &())));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        let id = match self.search(key) {
            Some(id) => id,
            None => return false,
        };

        let node = self.arena.get(id);
        match (node.left, node.right) {
            (None, right) => {
                self.splice_out(id, right);
            }
            (Some(left), None) => {
                self.splice_out(id, Some(left));
            }
            (Some(_), Some(right)) => {
                // The leftmost node of the right subtree has no left child, so
                // it comes out like the first case above.
                let successor = self.leftmost(right);
                let successor_right = self.arena.get(successor).right;
                let Node { key, value, .. } = self.splice_out(successor, successor_right);

                let node = self.arena.get_mut(id);
                node.key = key;
                node.value = value;
            }
        }
        true
    }

    /// Same as [`delete`][Self::delete].
    pub fn remove(&mut self, key: &K) -> bool {
        self.delete(key)
    }

    /// Walks the whole tree and panics if any structural invariant is broken:
    ///
    /// 1. every key in a left subtree compares less than its ancestor's key and
    ///    every key in a right subtree compares greater or equal,
    /// 2. every child points back at its parent and the root has no parent,
    /// 3. every live node is reachable from the root exactly once.
    ///
    /// # Panics
    ///
    /// When one of the invariants doesn't hold.
    pub fn assert_invariants(&self) {
        let live = self.arena.len();
        let mut seen = 0;
        let mut stack: Vec<(NodeId, Option<&K>, Option<&K>)> = Vec::new();

        if let Some(root) = self.root {
            assert_eq!(self.arena.get(root).parent, None, "root has a parent");
            stack.push((root, None, None));
        } else {
            assert_eq!(live, 0, "empty tree still holds nodes");
        }

        while let Some((id, lower, upper)) = stack.pop() {
            seen += 1;
            assert!(seen <= live, "more nodes reachable than stored: cycle");

            let node = self.arena.get(id);
            if let Some(lower) = lower {
                assert_ne!(
                    self.cmp.compare(&node.key, lower),
                    Ordering::Less,
                    "node {:?} sorts before an ancestor it is right of",
                    id
                );
            }
            if let Some(upper) = upper {
                assert_eq!(
                    self.cmp.compare(&node.key, upper),
                    Ordering::Less,
                    "node {:?} doesn't sort before an ancestor it is left of",
                    id
                );
            }

            if let Some(left) = node.left {
                assert_eq!(self.arena.get(left).parent, Some(id), "bad parent link");
                stack.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right {
                assert_eq!(self.arena.get(right).parent, Some(id), "bad parent link");
                stack.push((right, Some(&node.key), upper));
            }
        }

        assert_eq!(seen, live, "some stored nodes are unreachable");
    }
}

impl<K, V, C> Extend<(K, V)> for OrderedTree<K, V, C>
where
    C: Comparator<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for OrderedTree<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::with_comparator(C::default());
        tree.extend(iter);
        tree
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Order, ReverseOrder};

    fn keys<C>(tree: &OrderedTree<i32, String, C>, order: Order) -> Vec<i32> {
        tree.traverse(order).map(|(k, _)| *k).collect()
    }

    #[test]
    fn always_adding_left() {
        let keys = [10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut inserted = Vec::new();

        let mut tree = OrderedTree::new();
        assert!(tree.find(&10).is_none());

        for &key in &keys {
            tree.insert(key, key * 2);
            inserted.push(key);
            for inserted in &inserted {
                assert_eq!(tree.find(inserted), Some(&(inserted * 2)));
            }
        }
        tree.assert_invariants();
    }

    #[test]
    fn always_adding_right() {
        let keys = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut inserted = Vec::new();

        let mut tree = OrderedTree::new();
        assert!(tree.find(&1).is_none());

        for &key in &keys {
            tree.insert(key, key * 2);
            inserted.push(key);
            for inserted in &inserted {
                assert_eq!(tree.find(inserted), Some(&(inserted * 2)));
            }
        }
        tree.assert_invariants();
    }

    #[test]
    fn duplicates_go_right() {
        let mut tree = OrderedTree::new();
        tree.insert(5, "first");
        tree.insert(5, "second");

        let root = tree.find_node(&5).unwrap();
        assert_eq!(root.value(), &"first");
        assert!(root.left().is_none());
        assert_eq!(root.right().map(|n| *n.value()), Some("second"));

        // Deleting reaches the first one; the second takes its place.
        assert!(tree.delete(&5));
        assert_eq!(tree.find(&5), Some(&"second"));
        assert!(tree.delete(&5));
        assert!(!tree.has(&5));
        tree.assert_invariants();
    }

    #[test]
    fn delete_with_no_children() {
        let mut tree = OrderedTree::new();

        tree.insert(5, 5.to_string());

        tree.insert(3, 3.to_string());
        tree.insert(7, 7.to_string());

        assert!(tree.delete(&7));
        assert_eq!(tree.find(&7), None);

        assert_eq!(tree.find(&3), Some(&3.to_string()));
        assert_eq!(tree.find(&5), Some(&5.to_string()));
        tree.assert_invariants();
    }

    #[test]
    fn delete_with_null_left() {
        let mut tree = OrderedTree::new();

        tree.insert(5, 5.to_string());

        tree.insert(3, 3.to_string());
        tree.insert(7, 7.to_string());

        tree.insert(9, 9.to_string());
        tree.insert(8, 8.to_string());

        assert!(tree.delete(&7));
        assert_eq!(tree.find(&7), None);

        // The whole right subtree of 7 survives and hangs off 5 now.
        assert_eq!(keys(&tree, Order::InOrder), vec![3, 5, 8, 9]);
        assert_eq!(tree.find_node(&9).unwrap().parent().map(|n| *n.key()), Some(5));
        tree.assert_invariants();
    }

    #[test]
    fn delete_with_null_right() {
        let mut tree = OrderedTree::new();

        tree.insert(5, 5.to_string());

        tree.insert(3, 3.to_string());
        tree.insert(7, 7.to_string());

        tree.insert(6, 6.to_string());

        assert!(tree.delete(&7));
        assert_eq!(tree.find(&7), None);

        assert_eq!(tree.find(&3), Some(&3.to_string()));
        assert_eq!(tree.find(&5), Some(&5.to_string()));
        assert_eq!(tree.find(&6), Some(&6.to_string()));
        assert_eq!(tree.find_node(&6).unwrap().parent().map(|n| *n.key()), Some(5));
        tree.assert_invariants();
    }

    #[test]
    fn delete_with_immediate_successor() {
        let mut tree = OrderedTree::new();

        tree.insert(5, 5.to_string());

        tree.insert(3, 3.to_string());
        tree.insert(7, 7.to_string());

        tree.insert(6, 6.to_string());
        tree.insert(8, 8.to_string());
        tree.insert(9, 9.to_string());

        assert!(tree.delete(&7));
        assert_eq!(tree.find(&7), None);

        let eight = tree.find_node(&8).unwrap();
        assert_eq!(eight.left().map(|n| *n.key()), Some(6));
        assert_eq!(eight.right().map(|n| *n.key()), Some(9));
        assert_eq!(eight.right().unwrap().parent(), Some(eight));
        tree.assert_invariants();
    }

    #[test]
    fn delete_with_deeper_successor() {
        let mut tree = OrderedTree::new();

        tree.insert(5, 5.to_string());

        tree.insert(3, 3.to_string());
        tree.insert(8, 8.to_string());

        tree.insert(2, 2.to_string());

        tree.insert(6, 6.to_string());
        tree.insert(9, 9.to_string());

        tree.insert(7, 7.to_string());

        assert!(tree.delete(&5));
        assert_eq!(tree.find(&5), None);

        // 6 was copied into the root; its right child 7 moved up under 8.
        assert_eq!(keys(&tree, Order::PreOrder), vec![6, 3, 2, 8, 7, 9]);
        assert_eq!(tree.find_node(&7).unwrap().parent().map(|n| *n.key()), Some(8));
        tree.assert_invariants();
    }

    #[test]
    fn delete_root() {
        let mut tree = OrderedTree::new();

        tree.insert(5, 5.to_string());

        assert!(tree.delete(&5));
        assert_eq!(tree.find(&5), None);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        tree.assert_invariants();
    }

    #[test]
    fn delete_missing_is_a_no_op() {
        let mut tree = OrderedTree::new();
        assert!(!tree.delete(&1));

        for &key in &[4, 2, 6, 1, 3] {
            tree.insert(key, key.to_string());
        }
        let before = keys(&tree, Order::PreOrder);

        assert!(!tree.delete(&5));
        assert!(!tree.remove(&0));
        assert_eq!(keys(&tree, Order::PreOrder), before);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn change_overwrites_in_place() {
        let mut tree = OrderedTree::new();
        tree.insert(1, "a".to_string());
        tree.insert(2, "b".to_string());

        assert!(tree.change(&2, "z".to_string()));
        assert!(!tree.change(&3, "nope".to_string()));

        assert_eq!(tree.find(&2), Some(&"z".to_string()));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn released_slots_are_reused() {
        let mut tree = OrderedTree::new();
        for key in 0..4 {
            tree.insert(key, key);
        }
        let id = tree.find_node(&2).unwrap().id();
        assert!(tree.delete(&2));

        tree.insert(10, 10);
        assert_eq!(tree.find_node(&10).unwrap().id(), id);
        tree.assert_invariants();
    }

    #[test]
    fn clear_drops_children_before_parents() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Noisy(i32, Rc<RefCell<Vec<i32>>>);
        impl Drop for Noisy {
            fn drop(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }

        for &walk in &[Walk::Recursive, Walk::Iterative] {
            let dropped = Rc::new(RefCell::new(Vec::new()));
            let mut tree = OrderedTree::with_config(Config::new().walk(walk));
            for &key in &[2, 1, 3] {
                tree.insert(key, Noisy(key, Rc::clone(&dropped)));
            }

            tree.clear();
            assert_eq!(*dropped.borrow(), vec![1, 3, 2]);
            assert!(tree.is_empty());
            tree.assert_invariants();

            tree.insert(7, Noisy(7, Rc::clone(&dropped)));
            drop(tree);
            assert_eq!(*dropped.borrow(), vec![1, 3, 2, 7]);
        }
    }

    #[test]
    fn custom_comparator() {
        let mut tree = OrderedTree::with_comparator(ReverseOrder);
        for &key in &[3, 1, 2] {
            tree.insert(key, key.to_string());
        }

        assert_eq!(keys(&tree, Order::InOrder), vec![3, 2, 1]);
        assert!(tree.delete(&2));
        assert_eq!(tree.first().map(|(k, _)| *k), Some(3));
        tree.assert_invariants();
    }

    #[test]
    fn clone_is_independent() {
        let mut tree: OrderedTree<i32, String> =
            vec![(2, "b"), (1, "a"), (3, "c")].into_iter().map(|(k, v)| (k, v.to_string())).collect();
        let copy = tree.clone();

        assert!(tree.delete(&2));
        assert_eq!(copy.find(&2), Some(&"b".to_string()));
        assert_eq!(keys(&copy, Order::PreOrder), vec![2, 1, 3]);
        copy.assert_invariants();
    }

    #[test]
    fn debug_shows_a_map() {
        let tree: OrderedTree<_, _> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1: 'a', 2: 'b'}");
    }

    #[test]
    #[should_panic(expected = "sorts before an ancestor")]
    fn assert_invariants_catches_misordered_keys() {
        let mut tree = OrderedTree::new();
        tree.insert(5, ());
        tree.insert(8, ());
        let eight = tree.find_node(&8).unwrap().id();
        tree.arena.get_mut(eight).key = 1;

        tree.assert_invariants();
    }
}
