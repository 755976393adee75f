//! Lazy traversal iterators.
//!
//! Every iterator here works with an explicit stack or queue instead of
//! recursion and yields values in exactly the order of the corresponding
//! visitor in [visitor](crate::traversal::visitor). They borrow the tree, so
//! it cannot be mutated while a traversal is alive.

use crate::model::Node;
use crate::traversal::TraversalOrder;
use std::collections::VecDeque;

// =#========================================================================#=
// PRE-ORDER
// =#========================================================================#=
/// Iterator for pre-order traversal (node, left, right).
pub struct PreOrderIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrderIter<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        PreOrderIter { stack: root.into_iter().collect() }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Right first, so left is popped next
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }

        Some(node.value())
    }
}

// =#========================================================================#=
// IN-ORDER
// =#========================================================================#=
/// Iterator for in-order traversal (left, node, right).
///
/// The stack always holds the unvisited part of the left spine below the
/// most recently entered subtree.
pub struct InOrderIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrderIter<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = InOrderIter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, T> Iterator for InOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

// =#========================================================================#=
// POST-ORDER
// =#========================================================================#=
/// Iterator for post-order traversal (left, right, node).
///
/// Uses two stacks: `stack` holds nodes still to expand, with `None` as a
/// sentinel marking where a deferred value is due, and `pending` holds the
/// deferred values of expanded inner nodes.
pub struct PostOrderIter<'a, T> {
    stack: Vec<Option<&'a Node<T>>>,
    pending: Vec<&'a T>,
}

impl<'a, T> PostOrderIter<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        PostOrderIter {
            stack: root.map(Some).into_iter().collect(),
            pending: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.stack.pop() {
            let Some(node) = entry else {
                // Sentinel: all children of the deferred node are done
                return self.pending.pop();
            };

            if node.is_leaf() {
                return Some(node.value());
            }

            self.pending.push(node.value());
            self.stack.push(None);
            if let Some(right) = node.right() {
                self.stack.push(Some(right));
            }
            if let Some(left) = node.left() {
                self.stack.push(Some(left));
            }
        }

        None
    }
}

// =#========================================================================#=
// LEVEL-ORDER
// =#========================================================================#=
/// Iterator for level-order (breadth-first) traversal.
///
/// Children are enqueued when their parent is yielded.
pub struct LevelOrderIter<'a, T> {
    queue: VecDeque<(&'a Node<T>, usize)>,
}

impl<'a, T> LevelOrderIter<'a, T> {
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        LevelOrderIter {
            queue: root.map(|node| (node, 0)).into_iter().collect(),
        }
    }

    /// Returns the depth of the value the next call to `next` will yield.
    pub fn peek_depth(&self) -> Option<usize> {
        self.queue.front().map(|&(_, depth)| depth)
    }
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.queue.pop_front()?;
        for child in node.children() {
            self.queue.push_back((child, depth + 1));
        }
        Some(node.value())
    }
}

// =#========================================================================#=
// ANY ORDER
// =#========================================================================#=
/// Iterator over values in a [TraversalOrder] chosen at runtime.
pub enum Traversal<'a, T> {
    PreOrder(PreOrderIter<'a, T>),
    InOrder(InOrderIter<'a, T>),
    PostOrder(PostOrderIter<'a, T>),
    LevelOrder(LevelOrderIter<'a, T>),
}

impl<'a, T> Traversal<'a, T> {
    pub fn new(order: TraversalOrder, root: Option<&'a Node<T>>) -> Self {
        match order {
            TraversalOrder::PreOrder => Traversal::PreOrder(PreOrderIter::new(root)),
            TraversalOrder::InOrder => Traversal::InOrder(InOrderIter::new(root)),
            TraversalOrder::PostOrder => Traversal::PostOrder(PostOrderIter::new(root)),
            TraversalOrder::LevelOrder => Traversal::LevelOrder(LevelOrderIter::new(root)),
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::PreOrder(iter) => iter.next(),
            Traversal::InOrder(iter) => iter.next(),
            Traversal::PostOrder(iter) => iter.next(),
            Traversal::LevelOrder(iter) => iter.next(),
        }
    }
}
