//! Recursive visitor walks.
//!
//! Each walk calls the visitor with a value and its depth (root at depth 0).
//! An absent root visits nothing.
//!
//! The depth-first walks recurse once per level. For trees nested thousands
//! of levels deep, prefer the iterators in [iter](crate::traversal::iter),
//! which keep their state on the heap.

use crate::model::Node;
use std::collections::VecDeque;

/// Visits node, then left subtree, then right subtree.
pub fn visit_pre_order<T, F>(root: Option<&Node<T>>, mut visitor: F)
where
    F: FnMut(&T, usize),
{
    fn walk<T, F: FnMut(&T, usize)>(node: Option<&Node<T>>, visitor: &mut F, depth: usize) {
        let Some(node) = node else {
            return;
        };
        visitor(node.value(), depth);
        walk(node.left(), visitor, depth + 1);
        walk(node.right(), visitor, depth + 1);
    }

    walk(root, &mut visitor, 0);
}

/// Visits left subtree, then node, then right subtree.
pub fn visit_in_order<T, F>(root: Option<&Node<T>>, mut visitor: F)
where
    F: FnMut(&T, usize),
{
    fn walk<T, F: FnMut(&T, usize)>(node: Option<&Node<T>>, visitor: &mut F, depth: usize) {
        let Some(node) = node else {
            return;
        };
        walk(node.left(), visitor, depth + 1);
        visitor(node.value(), depth);
        walk(node.right(), visitor, depth + 1);
    }

    walk(root, &mut visitor, 0);
}

/// Visits left subtree, then right subtree, then node.
pub fn visit_post_order<T, F>(root: Option<&Node<T>>, mut visitor: F)
where
    F: FnMut(&T, usize),
{
    fn walk<T, F: FnMut(&T, usize)>(node: Option<&Node<T>>, visitor: &mut F, depth: usize) {
        let Some(node) = node else {
            return;
        };
        walk(node.left(), visitor, depth + 1);
        walk(node.right(), visitor, depth + 1);
        visitor(node.value(), depth);
    }

    walk(root, &mut visitor, 0);
}

/// Visits breadth-first, shallow levels first and left to right within a level.
///
/// The children of a dequeued node are enqueued before the visitor is called
/// for that node.
pub fn visit_level_order<T, F>(root: Option<&Node<T>>, mut visitor: F)
where
    F: FnMut(&T, usize),
{
    let mut queue: VecDeque<(&Node<T>, usize)> = root.map(|node| (node, 0)).into_iter().collect();

    while let Some((node, depth)) = queue.pop_front() {
        for child in node.children() {
            queue.push_back((child, depth + 1));
        }
        visitor(node.value(), depth);
    }
}

/// Visits whole nodes in pre-order, e.g. for renderers that need colors or children.
pub fn visit_nodes_pre_order<T, F>(root: Option<&Node<T>>, mut visitor: F)
where
    F: FnMut(&Node<T>, usize),
{
    fn walk<T, F: FnMut(&Node<T>, usize)>(node: Option<&Node<T>>, visitor: &mut F, depth: usize) {
        let Some(node) = node else {
            return;
        };
        visitor(node, depth);
        walk(node.left(), visitor, depth + 1);
        walk(node.right(), visitor, depth + 1);
    }

    walk(root, &mut visitor, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1 (2 (4), 3 (, 5))
    fn lopsided() -> Node<i32> {
        Node::new(1)
            .with_left(Node::new(2).with_left(Node::new(4)))
            .with_right(Node::new(3).with_right(Node::new(5)))
    }

    #[test]
    fn test_depths_follow_levels() {
        let root = lopsided();

        let mut seen = Vec::new();
        visit_pre_order(Some(&root), |value, depth| seen.push((*value, depth)));
        assert_eq!(seen, vec![(1, 0), (2, 1), (4, 2), (3, 1), (5, 2)]);

        seen.clear();
        visit_in_order(Some(&root), |value, depth| seen.push((*value, depth)));
        assert_eq!(seen, vec![(4, 2), (2, 1), (1, 0), (3, 1), (5, 2)]);

        seen.clear();
        visit_post_order(Some(&root), |value, depth| seen.push((*value, depth)));
        assert_eq!(seen, vec![(4, 2), (2, 1), (5, 2), (3, 1), (1, 0)]);

        seen.clear();
        visit_level_order(Some(&root), |value, depth| seen.push((*value, depth)));
        assert_eq!(seen, vec![(1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_absent_root_visits_nothing() {
        let mut calls = 0;
        visit_pre_order::<i32, _>(None, |_, _| calls += 1);
        visit_in_order::<i32, _>(None, |_, _| calls += 1);
        visit_post_order::<i32, _>(None, |_, _| calls += 1);
        visit_level_order::<i32, _>(None, |_, _| calls += 1);
        visit_nodes_pre_order::<i32, _>(None, |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_node_visitor_sees_leaves() {
        let root = lopsided();
        let mut leaves = Vec::new();
        visit_nodes_pre_order(Some(&root), |node, _| {
            if node.is_leaf() {
                leaves.push(*node.value());
            }
        });
        assert_eq!(leaves, vec![4, 5]);
    }
}
