//! Traversals of binary trees in four orders.
//!
//! Each order is available in two forms:
//! * an eager, recursive *visitor* walk calling a closure with
//!   `(value, depth)` for every node (see [visitor]), and
//! * a lazy, one-shot *iterator* over values built on an explicit stack or
//!   queue (see [iter]).
//!
//! Both forms produce identical value sequences. All functions take the root
//! as `Option<&Node<T>>`, so the empty tree is simply `None` and yields nothing.
//!
//! | Order | Sequence | Visitor | Iterator |
//! |-------|----------|---------|----------|
//! | Pre-order | node, left, right | [visit_pre_order] | [PreOrderIter] |
//! | In-order | left, node, right | [visit_in_order] | [InOrderIter] |
//! | Post-order | left, right, node | [visit_post_order] | [PostOrderIter] |
//! | Level-order | breadth-first | [visit_level_order] | [LevelOrderIter] |

pub mod iter;
pub mod visitor;

pub use iter::{InOrderIter, LevelOrderIter, PostOrderIter, PreOrderIter, Traversal};
pub use visitor::{
    visit_in_order, visit_level_order, visit_nodes_pre_order, visit_post_order, visit_pre_order,
};

use crate::model::Node;
use std::fmt;
use std::str::FromStr;

/// The four traversal orders.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum TraversalOrder {
    PreOrder,
    InOrder,
    PostOrder,
    LevelOrder,
}

impl TraversalOrder {
    /// All orders, in the order they are usually listed.
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "pre-order",
            TraversalOrder::InOrder => "in-order",
            TraversalOrder::PostOrder => "post-order",
            TraversalOrder::LevelOrder => "level-order",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized [TraversalOrder] name.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
#[error("Unknown traversal order '{0}' (expected pre, in, post or level)")]
pub struct UnknownOrderError(pub String);

impl FromStr for TraversalOrder {
    type Err = UnknownOrderError;

    /// Accepts `pre`, `in`, `post`, `level` (or `by-level`, `bfs`), with or
    /// without an `-order` suffix, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix("-order").unwrap_or(&lowered);
        match name {
            "pre" | "preorder" => Ok(TraversalOrder::PreOrder),
            "in" | "inorder" => Ok(TraversalOrder::InOrder),
            "post" | "postorder" => Ok(TraversalOrder::PostOrder),
            "level" | "levelorder" | "by-level" | "bylevel" | "bfs" => Ok(TraversalOrder::LevelOrder),
            _ => Err(UnknownOrderError(s.to_string())),
        }
    }
}

/// Runs the visitor walk for the given order.
pub fn visit<T, F>(order: TraversalOrder, root: Option<&Node<T>>, visitor: F)
where
    F: FnMut(&T, usize),
{
    match order {
        TraversalOrder::PreOrder => visit_pre_order(root, visitor),
        TraversalOrder::InOrder => visit_in_order(root, visitor),
        TraversalOrder::PostOrder => visit_post_order(root, visitor),
        TraversalOrder::LevelOrder => visit_level_order(root, visitor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_str() {
        assert_eq!("pre".parse(), Ok(TraversalOrder::PreOrder));
        assert_eq!("In-Order".parse(), Ok(TraversalOrder::InOrder));
        assert_eq!("postorder".parse(), Ok(TraversalOrder::PostOrder));
        assert_eq!("by-level".parse(), Ok(TraversalOrder::LevelOrder));
        assert_eq!(
            "sideways".parse::<TraversalOrder>(),
            Err(UnknownOrderError("sideways".to_string()))
        );
    }

    #[test]
    fn test_order_display_parses_back() {
        for order in TraversalOrder::ALL {
            assert_eq!(order.to_string().parse(), Ok(order));
        }
    }
}
