//! Depth-first walks over a whole [`OrderedTree`].
//!
//! The visit [`Order`] picks where a node goes relative to its subtrees:
//!
//! | order       | sequence            |
//! |-------------|---------------------|
//! | `InOrder`   | left, node, right   |
//! | `PreOrder`  | node, left, right   |
//! | `PostOrder` | right, left, node   |
//!
//! Note that `PostOrder` visits the *right* subtree first. Children still come
//! before their parent, but the result is the mirror image of the textbook
//! left-right-node post-order.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Order, OrderedTree};
//!
//! let tree: OrderedTree<_, _> = vec![(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
//!
//! let post: Vec<_> = tree.traverse(Order::PostOrder).map(|(k, _)| *k).collect();
//! assert_eq!(post, vec![3, 1, 2]);
//!
//! assert_eq!(tree.display(Order::PreOrder).to_string(), "b a c");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::arena::{Arena, NodeId};
use crate::config::Walk;
use crate::error::Error;
use crate::tree::OrderedTree;

/// The order a depth-first walk visits nodes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields keys in sorted order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Right subtree, left subtree, node.
    PostOrder,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Order::InOrder => "in-order",
            Order::PreOrder => "pre-order",
            Order::PostOrder => "post-order",
        })
    }
}

/// Parses `"inorder"`, `"in-order"`, `"in_order"` and so on, ignoring case.
impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "inorder" => Ok(Order::InOrder),
            "preorder" => Ok(Order::PreOrder),
            "postorder" => Ok(Order::PostOrder),
            _ => Err(Error::UnknownOrder(s.to_string())),
        }
    }
}

/// Pending work for [`Traverse`]: either a subtree to unfold or a node to yield.
#[derive(Clone, Copy, Debug)]
enum Step {
    Expand(NodeId),
    Emit(NodeId),
}

/// A lazy depth-first walk over a tree in a fixed [`Order`].
///
/// Made by [`OrderedTree::traverse`]. Keeps an explicit stack rather than
/// recursing, so it handles degenerate, list-shaped trees of any depth. To
/// start over, call `traverse` again.
pub struct Traverse<'a, K, V> {
    arena: &'a Arena<K, V>,
    order: Order,
    stack: Vec<Step>,
}

impl<'a, K, V> Clone for Traverse<'a, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            order: self.order,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K, V> fmt::Debug for Traverse<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverse")
            .field("order", &self.order)
            .field("pending", &self.stack.len())
            .finish()
    }
}

impl<'a, K, V> Traverse<'a, K, V> {
    fn new(arena: &'a Arena<K, V>, root: Option<NodeId>, order: Order) -> Self {
        Self {
            arena,
            order,
            stack: root.map(Step::Expand).into_iter().collect(),
        }
    }

    /// Pushes the work for the subtree at `id` so that it pops in visit order.
    fn expand(&mut self, id: NodeId) {
        let arena = self.arena;
        let node = arena.get(id);
        let left = node.left.map(Step::Expand);
        let right = node.right.map(Step::Expand);
        let emit = Some(Step::Emit(id));

        let pushes = match self.order {
            Order::InOrder => [right, emit, left],
            Order::PreOrder => [right, left, emit],
            Order::PostOrder => [emit, left, right],
        };
        self.stack.extend(pushes.iter().flatten());
    }
}

impl<'a, K, V> Iterator for Traverse<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Expand(id) => self.expand(id),
                Step::Emit(id) => {
                    let arena = self.arena;
                    let node = arena.get(id);
                    return Some((&node.key, &node.value));
                }
            }
        }
        None
    }
}

fn walk_recursive<K, V, F>(arena: &Arena<K, V>, id: Option<NodeId>, order: Order, f: &mut F)
where
    F: FnMut(&K, &V),
{
    let id = match id {
        Some(id) => id,
        None => return,
    };
    let node = arena.get(id);
    match order {
        Order::InOrder => {
            walk_recursive(arena, node.left, order, f);
            f(&node.key, &node.value);
            walk_recursive(arena, node.right, order, f);
        }
        Order::PreOrder => {
            f(&node.key, &node.value);
            walk_recursive(arena, node.left, order, f);
            walk_recursive(arena, node.right, order, f);
        }
        Order::PostOrder => {
            walk_recursive(arena, node.right, order, f);
            walk_recursive(arena, node.left, order, f);
            f(&node.key, &node.value);
        }
    }
}

impl<K, V, C> OrderedTree<K, V, C> {
    /// A lazy walk over every entry in the given order.
    pub fn traverse(&self, order: Order) -> Traverse<'_, K, V> {
        Traverse::new(self.arena(), self.root_id(), order)
    }

    /// Calls `f` on every entry in the given order.
    ///
    /// Whether this recurses or keeps its own stack is decided by the tree's
    /// [`Config::walk`][crate::Config::walk].
    pub fn for_each<F>(&self, order: Order, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        match self.config().walk {
            Walk::Recursive => walk_recursive(self.arena(), self.root_id(), order, &mut f),
            Walk::Iterative => self.traverse(order).for_each(|(k, v)| f(k, v)),
        }
    }

    /// Calls `f` on every entry: left subtree, node, right subtree.
    pub fn for_each_in_order<F: FnMut(&K, &V)>(&self, f: F) {
        self.for_each(Order::InOrder, f)
    }

    /// Calls `f` on every entry: node, left subtree, right subtree.
    pub fn for_each_pre_order<F: FnMut(&K, &V)>(&self, f: F) {
        self.for_each(Order::PreOrder, f)
    }

    /// Calls `f` on every entry: right subtree, left subtree, node.
    pub fn for_each_post_order<F: FnMut(&K, &V)>(&self, f: F) {
        self.for_each(Order::PostOrder, f)
    }

    /// Formats the values in the given order, separated by single spaces.
    pub fn display(&self, order: Order) -> DisplayValues<'_, K, V> {
        DisplayValues {
            traverse: self.traverse(order),
        }
    }
}

/// Writes a tree's values in some [`Order`]. Made by [`OrderedTree::display`].
pub struct DisplayValues<'a, K, V> {
    traverse: Traverse<'a, K, V>,
}

impl<'a, K, V> fmt::Display for DisplayValues<'a, K, V>
where
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, value)) in self.traverse.clone().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
