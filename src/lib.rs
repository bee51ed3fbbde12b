//! This crate exposes an unbalanced Binary Search Tree (BST) whose nodes know
//! their parents, so it can be walked in key order in both directions without
//! keeping a stack.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! that was inserted with it, and sometimes child `Node`s. The most important
//! invariants of this BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than *or equal to* its own key. Duplicate keys are allowed.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. This tree never rebalances, so its
//! height depends entirely on insertion order: inserting keys in sorted order
//! produces a tree that is really a linked list.
//!
//! ## Parent links
//!
//! Every node also points at its parent. A [`Cursor`] uses those links to
//! step to the in-order successor (the leftmost node of the right subtree, or
//! the nearest ancestor whose left subtree we are in) and predecessor in
//! constant extra space. Nodes are stored in an arena owned by the tree and
//! linked by index, so parent links can never dangle.
//!
//! ## Example
//!
//! ```
//! use ordtree::{Order, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! for &(key, label) in &[
//!     (5, "bes"), (2, "iki"), (3, "uc"), (7, "yedi"), (6, "alti"),
//!     (10, "on"), (1, "bir"), (0, "sifir"), (4, "dort"),
//! ] {
//!     tree.insert(key, label);
//! }
//!
//! tree.delete(&5);
//! assert_eq!(
//!     tree.display(Order::InOrder).to_string(),
//!     "sifir bir iki uc dort alti yedi on"
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod compare;
mod config;
mod cursor;
mod error;
mod node;
mod traversal;
mod tree;

pub use arena::NodeId;
pub use compare::{Comparator, NaturalOrder, ReverseOrder};
pub use config::{Config, Walk};
pub use cursor::{Cursor, Iter};
pub use error::{Error, Result};
pub use node::NodeRef;
pub use traversal::{DisplayValues, Order, Traverse};
pub use tree::OrderedTree;
