//! Construction-time settings for an [`OrderedTree`][crate::OrderedTree].

/// How callback traversals ([`for_each`][crate::OrderedTree::for_each]) and
/// whole-tree teardown walk the nodes.
///
/// The tree never rebalances, so inserting keys in sorted order builds a tree
/// as deep as it is long. `Recursive` uses one stack frame per level and can
/// overflow the call stack on such trees; `Iterative` keeps its own heap stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Walk {
    /// Plain depth-first recursion.
    Recursive,
    /// Depth-first walk driven by an explicit stack.
    Iterative,
}

impl Default for Walk {
    fn default() -> Self {
        Walk::Iterative
    }
}

/// Settings for a tree.
///
/// # Examples
///
/// ```
/// use ordtree::{Config, OrderedTree, Walk};
///
/// let config = Config::new().walk(Walk::Recursive).capacity(16);
/// let tree: OrderedTree<u8, ()> = OrderedTree::with_config(config);
///
/// assert_eq!(tree.config().walk, Walk::Recursive);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    /// Traversal strategy for callbacks and teardown.
    pub walk: Walk,
    /// Node slots to allocate up front.
    pub capacity: usize,
}

impl Config {
    /// The default settings: iterative walks, no pre-allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the walk strategy.
    pub fn walk(mut self, walk: Walk) -> Self {
        self.walk = walk;
        self
    }

    /// Sets how many node slots to allocate up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
