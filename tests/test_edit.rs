use bracktree::bracket::parse_str;
use bracktree::edit::{delete_one_child_node, delete_one_child_nodes, delete_one_child_nodes_bounded};
use bracktree::model::{Node, Tree};
use bracktree::to_bracket_str;

fn bracket(tree: &Tree<i32>) -> String {
    to_bracket_str(tree).unwrap()
}

#[test]
fn test_single_deletion_promotes_child() {
    let mut tree = parse_str::<i32>("1 (2 (4, 5), 3 (6))").unwrap();
    assert_eq!(delete_one_child_node(&mut tree), Some(3));
    assert_eq!(bracket(&tree), "1 (2 (4, 5), 6)");
    assert_eq!(delete_one_child_node(&mut tree), None);
}

#[test]
fn test_deletion_is_pre_order_first() {
    // Both 2 and 3 have one child, 2 comes first in pre-order
    let mut tree = parse_str::<i32>("1 (2 (4), 3 (5))").unwrap();
    assert_eq!(delete_one_child_node(&mut tree), Some(2));
    assert_eq!(bracket(&tree), "1 (4, 3 (5))");
    assert_eq!(delete_one_child_node(&mut tree), Some(3));
    assert_eq!(bracket(&tree), "1 (4, 5)");
}

#[test]
fn test_root_deletion() {
    let mut tree = parse_str::<i32>("1 (2 (3, 4))").unwrap();
    assert_eq!(delete_one_child_node(&mut tree), Some(1));
    assert_eq!(bracket(&tree), "2 (3, 4)");
    assert_eq!(*tree.root().unwrap().value(), 2);
}

#[test]
fn test_fixed_point_on_chain() {
    let mut tree = parse_str::<i32>("1 (2 (3 (4 (5))))").unwrap();
    assert_eq!(delete_one_child_nodes(&mut tree), 4);
    assert_eq!(bracket(&tree), "5");
    assert!(!tree.has_one_child_nodes());
    assert_eq!(delete_one_child_nodes(&mut tree), 0);
}

#[test]
fn test_fixed_point_reference_shape() {
    let mut tree = parse_str::<i32>("1 (2 (4 (8)), 3 (5 (9, 10), 6 (11 (12))))").unwrap();
    let leaves_before = tree.num_leaves();

    let removed = tree.delete_one_child_nodes();
    assert_eq!(removed, 4);
    assert_eq!(bracket(&tree), "1 (8, 3 (5 (9, 10), 12))");
    assert_eq!(tree.num_leaves(), leaves_before);
    assert!(!tree.has_one_child_nodes());
}

#[test]
fn test_bounded_deletion() {
    let mut tree = parse_str::<i32>("1 (2 (3 (4 (5))))").unwrap();
    assert_eq!(delete_one_child_nodes_bounded(&mut tree, 2), 2);
    assert_eq!(bracket(&tree), "3 (4 (5))");

    assert_eq!(delete_one_child_nodes_bounded(&mut tree, 100), 2);
    assert_eq!(bracket(&tree), "5");

    assert_eq!(delete_one_child_nodes_bounded(&mut tree, 0), 0);
}

#[test]
fn test_right_only_child_is_promoted() {
    let mut tree = Tree::from_root(Node::new(1).with_left(Node::new(2)).with_right(Node::new(3).with_right(Node::new(7))));
    assert!(tree.has_right_only_nodes());

    assert_eq!(tree.delete_one_child_node(), Some(3));
    assert!(!tree.has_right_only_nodes());
    assert_eq!(bracket(&tree), "1 (2, 7)");
}

#[test]
fn test_empty_and_leaf_trees_unchanged() {
    let mut empty: Tree<i32> = Tree::new();
    assert_eq!(delete_one_child_node(&mut empty), None);
    assert_eq!(delete_one_child_nodes(&mut empty), 0);
    assert!(empty.is_empty());

    let mut leaf = parse_str::<i32>("9").unwrap();
    assert_eq!(leaf.delete_one_child_nodes(), 0);
    assert_eq!(bracket(&leaf), "9");
}

#[test]
fn test_deep_chain_collapses_in_one_pass() {
    let mut chain = Node::new(0);
    for value in 1..50_000 {
        chain = Node::new(value).with_left(chain);
    }
    let mut tree = Tree::from_root(chain);

    assert_eq!(delete_one_child_node(&mut tree), Some(49_999));
    assert_eq!(delete_one_child_nodes_bounded(&mut tree, 9_999), 9_999);
    assert_eq!(tree.root().map(|n| *n.value()), Some(39_999));

    assert_eq!(delete_one_child_nodes(&mut tree), 39_999);
    assert_eq!(bracket(&tree), "0");
}

#[test]
fn test_single_pass_matches_repeated_deletion() {
    let text = "1 (2 (3 (4, 5)), 6 (7 (8 (9, 10 (11)))))";
    let mut repeated = parse_str::<i32>(text).unwrap();
    let mut removed_values = Vec::new();
    while let Some(value) = delete_one_child_node(&mut repeated) {
        removed_values.push(value);
    }
    assert_eq!(removed_values, vec![2, 6, 7, 10]);

    let mut single_pass = parse_str::<i32>(text).unwrap();
    assert_eq!(delete_one_child_nodes(&mut single_pass), removed_values.len());
    assert_eq!(bracket(&single_pass), bracket(&repeated));
    assert_eq!(bracket(&single_pass), "1 (3 (4, 5), 8 (9, 11))");

    let mut bounded = parse_str::<i32>(text).unwrap();
    assert_eq!(delete_one_child_nodes_bounded(&mut bounded, 2), 2);
    assert_eq!(bracket(&bounded), "1 (3 (4, 5), 7 (8 (9, 10 (11))))");
}
