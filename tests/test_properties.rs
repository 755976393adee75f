use bracktree::bracket::{BracketStyle, parse_str, to_bracket};
use bracktree::model::{Node, Tree};
use bracktree::traversal::TraversalOrder;
use proptest::prelude::*;

/// Trees without right-only nodes, which is every shape bracket notation can express.
fn arb_node() -> impl Strategy<Value = Node<i32>> {
    let leaf = any::<i32>().prop_map(Node::new);
    leaf.prop_recursive(8, 64, 2, |inner| {
        (any::<i32>(), inner.clone(), proptest::option::of(inner))
            .prop_map(|(value, left, right)| Node::with_children(value, Some(left), right))
    })
}

fn arb_tree() -> impl Strategy<Value = Tree<i32>> {
    proptest::option::weighted(0.95, arb_node()).prop_map(|root| match root {
        Some(root) => Tree::from_root(root),
        None => Tree::new(),
    })
}

proptest! {
    #[test]
    fn bracket_round_trip(tree in arb_tree()) {
        for style in [BracketStyle::Spaced, BracketStyle::Compact] {
            let text = to_bracket(&tree, style).unwrap();
            prop_assert_eq!(parse_str::<i32>(&text).unwrap(), tree.clone());
        }
    }

    #[test]
    fn visitors_and_iterators_agree(tree in arb_tree()) {
        for order in TraversalOrder::ALL {
            let mut visited = Vec::new();
            tree.visit(order, |value, _| visited.push(*value));
            let iterated: Vec<i32> = tree.iter(order).copied().collect();
            prop_assert_eq!(visited.len(), tree.num_nodes());
            prop_assert_eq!(visited, iterated);
        }
    }

    #[test]
    fn level_order_depths_never_decrease(tree in arb_tree()) {
        let mut depths = Vec::new();
        tree.visit_level_order(|_, depth| depths.push(depth));
        prop_assert!(depths.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(depths.last().map_or(0, |d| d + 1), tree.height());
    }

    #[test]
    fn normalization_reaches_fixed_point(tree in arb_tree()) {
        let mut tree = tree;
        let nodes_before = tree.num_nodes();
        let leaves_before = tree.num_leaves();

        let removed = tree.delete_one_child_nodes();

        prop_assert!(!tree.has_one_child_nodes());
        prop_assert!(!tree.has_right_only_nodes());
        prop_assert_eq!(tree.num_nodes() + removed, nodes_before);
        prop_assert_eq!(tree.num_leaves(), leaves_before);
        prop_assert_eq!(tree.delete_one_child_node(), None);
    }
}

#[test]
fn arbitrary_input_never_panics() {
    proptest!(|(text in "[0-9a-z(), ]{0,40}")| {
        let _ = parse_str::<i32>(&text);
    });
}
