//! Tree module for binary tree representation.
//!
//! This module provides [Tree], which owns an optional root [Node] and
//! exposes traversals, structural edits and bracket notation on it.

use crate::edit;
use crate::model::node::Node;
use crate::traversal::{
    self, InOrderIter, LevelOrderIter, PostOrderIter, PreOrderIter, Traversal, TraversalOrder,
};

/// Errors for operations that need a non-empty [Tree].
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum TreeError {
    #[error("Tree is empty")]
    EmptyTree,
}

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A binary tree with single-owner nodes.
///
/// The root is optional: an empty tree is a valid tree of zero nodes, and
/// every traversal or serialization of it yields nothing.
///
/// # Construction
/// Trees are usually parsed from bracket notation
/// (see [bracket](crate::bracket)), but can also be assembled from [Node]s.
///
/// # Example
/// ```
/// use bracktree::model::{Node, Tree};
///
/// // 1 (2 (4, 5), 3)
/// let tree = Tree::from_root(
///     Node::new(1)
///         .with_left(Node::new(2).with_left(Node::new(4)).with_right(Node::new(5)))
///         .with_right(Node::new(3)),
/// );
///
/// let pre: Vec<i32> = tree.pre_order_iter().copied().collect();
/// assert_eq!(pre, vec![1, 2, 4, 5, 3]);
/// assert_eq!(tree.num_nodes(), 5);
/// assert_eq!(tree.height(), 3);
/// ```
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Tree<T> {
    pub(crate) root: Option<Box<Node<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Tree { root: None }
    }

    /// Creates a tree owning the given root.
    pub fn from_root(root: Node<T>) -> Self {
        Tree { root: Some(Box::new(root)) }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root, or `None` for the empty tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Returns the root, or [TreeError::EmptyTree].
    pub fn try_root(&self) -> Result<&Node<T>, TreeError> {
        self.root().ok_or(TreeError::EmptyTree)
    }

    /// Replaces the root, returning the previous one.
    pub fn set_root(&mut self, root: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.root, root.map(Box::new)).map(|node| *node)
    }

    /// Removes and returns the root, leaving the tree empty.
    pub fn take_root(&mut self) -> Option<Node<T>> {
        self.set_root(None)
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.pre_order_iter().count()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.nodes().filter(|node| node.is_leaf()).count()
    }

    /// Returns the number of levels, i.e. 0 for the empty tree and 1 for a single node.
    pub fn height(&self) -> usize {
        let mut levels = self.level_order_iter();
        let mut height = 0;
        while let Some(depth) = levels.peek_depth() {
            height = depth + 1;
            levels.next();
        }
        height
    }

    /// Returns whether any node has exactly one child.
    pub fn has_one_child_nodes(&self) -> bool {
        self.nodes().any(Node::has_one_child)
    }

    /// Returns whether any node has a right child but no left child.
    ///
    /// Such trees cannot be written to bracket notation losslessly.
    pub fn has_right_only_nodes(&self) -> bool {
        self.nodes().any(Node::is_right_only)
    }

    /// All nodes in pre-order, from an explicit stack.
    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right());
            stack.extend(node.left());
            Some(node)
        })
    }
}

// ============================================================================
// Traversals (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Calls `visitor(value, depth)` for every node in pre-order.
    pub fn visit_pre_order<F: FnMut(&T, usize)>(&self, visitor: F) {
        traversal::visit_pre_order(self.root(), visitor);
    }

    /// Calls `visitor(value, depth)` for every node in in-order.
    pub fn visit_in_order<F: FnMut(&T, usize)>(&self, visitor: F) {
        traversal::visit_in_order(self.root(), visitor);
    }

    /// Calls `visitor(value, depth)` for every node in post-order.
    pub fn visit_post_order<F: FnMut(&T, usize)>(&self, visitor: F) {
        traversal::visit_post_order(self.root(), visitor);
    }

    /// Calls `visitor(value, depth)` for every node in level-order.
    pub fn visit_level_order<F: FnMut(&T, usize)>(&self, visitor: F) {
        traversal::visit_level_order(self.root(), visitor);
    }

    /// Calls `visitor(node, depth)` for every node in pre-order.
    pub fn visit_nodes_pre_order<F: FnMut(&Node<T>, usize)>(&self, visitor: F) {
        traversal::visit_nodes_pre_order(self.root(), visitor);
    }

    /// Calls `visitor(value, depth)` for every node in the given order.
    pub fn visit<F: FnMut(&T, usize)>(&self, order: TraversalOrder, visitor: F) {
        traversal::visit(order, self.root(), visitor);
    }

    pub fn pre_order_iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self.root())
    }

    pub fn in_order_iter(&self) -> InOrderIter<'_, T> {
        InOrderIter::new(self.root())
    }

    pub fn post_order_iter(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self.root())
    }

    pub fn level_order_iter(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(self.root())
    }

    /// Returns a lazy iterator over values in the given order.
    pub fn iter(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(order, self.root())
    }
}

/// Iterating over a `&Tree` yields its values in-order.
impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order_iter()
    }
}

// ============================================================================
// Structural edits (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Removes the first node in pre-order with exactly one child, promoting
    /// that child into its slot.
    ///
    /// Returns the removed value, or `None` if no such node exists.
    /// See [edit::delete_one_child_node].
    pub fn delete_one_child_node(&mut self) -> Option<T> {
        edit::delete_one_child_node(self)
    }

    /// Removes degree-one nodes until none is left, returning how many were removed.
    pub fn delete_one_child_nodes(&mut self) -> usize {
        edit::delete_one_child_nodes(self)
    }
}

/// Takes the nodes apart one at a time, so dropping a deep tree does not
/// recurse once per level.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> From<Node<T>> for Tree<T> {
    fn from(root: Node<T>) -> Self {
        Tree::from_root(root)
    }
}
