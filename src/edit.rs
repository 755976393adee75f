//! Structural edits on trees.
//!
//! The single primitive is [delete_one_child_node]: remove the first node
//! (in pre-order) that has exactly one child and promote that child into the
//! removed node's slot. Nodes have no parent references, so the edit walks
//! the owning slots with an explicit stack and rewrites the slot that held
//! the removed node.
//!
//! Promotion keeps the child on the side its parent occupied. A node with two
//! children keeps two children, and a left child never becomes a right
//! child, so the edit never creates a right-only node that was not already there.
//!
//! Removing a node never changes the degree of any other node, so the nodes
//! before the edited slot in pre-order stay as they were. Repeated deletion
//! therefore resumes where the previous one stopped, and
//! [delete_one_child_nodes] reaches the fixed point in a single pass.

use crate::model::{Node, Tree};
use tracing::{debug, trace};

type Slot<T> = Option<Box<Node<T>>>;

/// Removes the first degree-one node in pre-order, replacing it with its only child.
///
/// At most one node is removed per call. If the removed node is the root,
/// the promoted child becomes the new root.
///
/// # Returns
/// * `Some(value)` - The value of the removed node
/// * `None` - The tree is empty or has no node with exactly one child;
///   the tree is left unchanged
///
/// # Example
/// ```
/// use bracktree::bracket::parse_str;
/// use bracktree::edit::delete_one_child_node;
///
/// let mut tree = parse_str::<i32>("1 (2 (4), 3 (5, 6))").unwrap();
/// assert_eq!(delete_one_child_node(&mut tree), Some(2));
/// assert_eq!(bracktree::to_bracket_str(&tree).unwrap(), "1 (4, 3 (5, 6))");
/// assert_eq!(delete_one_child_node(&mut tree), None);
/// ```
pub fn delete_one_child_node<T>(tree: &mut Tree<T>) -> Option<T> {
    let mut stack: Vec<(&mut Slot<T>, usize)> = vec![(&mut tree.root, 0)];

    while let Some((slot, depth)) = stack.pop() {
        if has_one_child(slot) {
            debug!(depth, "removed node with exactly one child");
            return promote_only_child(slot);
        }
        push_children(&mut stack, slot, depth);
    }

    trace!("no node with exactly one child left");
    None
}

/// Removes degree-one nodes until none is left.
///
/// Equivalent to calling [delete_one_child_node] until it returns `None`,
/// but done in one pre-order pass.
///
/// # Returns
/// The number of removed nodes
pub fn delete_one_child_nodes<T>(tree: &mut Tree<T>) -> usize {
    let removed = collapse(tree, usize::MAX);
    debug!(removed, "removed all nodes with exactly one child");
    removed
}

/// Removes at most `passes` degree-one nodes, in the order repeated calls of
/// [delete_one_child_node] would remove them.
///
/// # Returns
/// The number of removed nodes, which is less than `passes` only if a fixed
/// point was reached
pub fn delete_one_child_nodes_bounded<T>(tree: &mut Tree<T>, passes: usize) -> usize {
    let removed = collapse(tree, passes);
    debug!(removed, passes, "removed nodes with exactly one child");
    removed
}

/// Walks the slots in pre-order, collapsing each slot until it holds no
/// degree-one node, and stops after `limit` removals.
fn collapse<T>(tree: &mut Tree<T>, limit: usize) -> usize {
    let mut removed = 0;
    let mut stack: Vec<(&mut Slot<T>, usize)> = vec![(&mut tree.root, 0)];

    while let Some((slot, depth)) = stack.pop() {
        while removed < limit && has_one_child(slot) {
            promote_only_child(slot);
            removed += 1;
            trace!(depth, "removed node with exactly one child");
        }
        if removed == limit {
            break;
        }
        push_children(&mut stack, slot, depth);
    }

    removed
}

fn has_one_child<T>(slot: &Slot<T>) -> bool {
    slot.as_ref().is_some_and(|node| node.has_one_child())
}

/// Replaces the node in `slot` by its only child and returns the node's value.
fn promote_only_child<T>(slot: &mut Slot<T>) -> Option<T> {
    let mut removed = slot.take()?;
    *slot = removed.left.take().or_else(|| removed.right.take());
    Some(removed.into_value())
}

/// Pushes the child slots of the node in `slot`, right first so left is popped next.
fn push_children<'a, T>(stack: &mut Vec<(&'a mut Slot<T>, usize)>, slot: &'a mut Slot<T>, depth: usize) {
    if let Some(node) = slot {
        let Node { left, right, .. } = &mut **node;
        stack.push((right, depth + 1));
        stack.push((left, depth + 1));
    }
}
