use std::fmt;
use std::ptr;

use crate::arena::{Arena, NodeId};

/// A read-only view of one node of an [`OrderedTree`][crate::OrderedTree],
/// returned by [`find_node`][crate::OrderedTree::find_node] and
/// [`Cursor::node`][crate::Cursor::node].
///
/// From a node you can walk to its parent and children, which is mostly useful
/// for inspecting the shape of the tree.
pub struct NodeRef<'a, K, V> {
    arena: &'a Arena<K, V>,
    id: NodeId,
}

impl<'a, K, V> Clone for NodeRef<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, K, V> Copy for NodeRef<'a, K, V> {}

/// Two views are equal when they look at the same node of the same tree.
impl<'a, K, V> PartialEq for NodeRef<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}
impl<'a, K, V> Eq for NodeRef<'a, K, V> {}

impl<'a, K, V> fmt::Debug for NodeRef<'a, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .field("parent", &self.parent().map(|n| n.key()))
            .field("left", &self.left().map(|n| n.key()))
            .field("right", &self.right().map(|n| n.key()))
            .finish()
    }
}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(arena: &'a Arena<K, V>, id: NodeId) -> Self {
        Self { arena, id }
    }

    fn link(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.arena, id))
    }

    /// The arena slot of this node. Slots are reused after deletion, so an id
    /// only identifies a node for as long as the tree isn't modified.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's key.
    pub fn key(&self) -> &'a K {
        &self.arena.get(self.id).key
    }

    /// The node's value.
    pub fn value(&self) -> &'a V {
        &self.arena.get(self.id).value
    }

    /// The node's key and value.
    pub fn entry(&self) -> (&'a K, &'a V) {
        let node = self.arena.get(self.id);
        (&node.key, &node.value)
    }

    /// The node this one hangs from. `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.link(self.arena.get(self.id).parent)
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<Self> {
        self.link(self.arena.get(self.id).left)
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<Self> {
        self.link(self.arena.get(self.id).right)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        let node = self.arena.get(self.id);
        node.left.is_none() && node.right.is_none()
    }

    /// Whether this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.arena.get(self.id).parent.is_none()
    }
}
