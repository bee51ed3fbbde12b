//! Slot storage for tree nodes.
//!
//! Nodes link to each other through [`NodeId`]s, which are plain indices into
//! an [`Arena`]. Removing a node vacates its slot and puts the index on a free
//! list, so the next insertion reuses it instead of growing the `Vec`.

use std::fmt;

/// Index of a node slot in its tree's arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none(), "free list held a live slot");
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Vacates the slot and hands back the node that lived there.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<K, V> {
        let node = self.slots[id.0]
            .take()
            .expect("Releasing a node implies it is live");
        self.free.push(id);
        node
    }

    /// Drops every node and forgets every slot.
    pub(crate) fn reset(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<K, V> {
        self.slots[id.0]
            .as_ref()
            .expect("NodeId handed out by the tree refers to a live node")
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.slots[id.0]
            .as_mut()
            .expect("NodeId handed out by the tree refers to a live node")
    }
}
