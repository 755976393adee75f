//! Bracket notation writing.

use crate::bracket::defs::{ESTIMATED_CHARS_PER_NODE, STRUCTURAL_DELIMITERS};
use crate::model::{Node, Tree};
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use std::fmt::Display;

/// Style for serializing a tree to bracket notation,
/// controlling the separators between elements.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum BracketStyle {
    /// Space before `(` and after `,`, e.g. `1 (2 (4, 5), 3)`
    #[default]
    Spaced,
    /// No whitespace, e.g. `1(2(4,5),3)`
    Compact,
}

impl BracketStyle {
    fn open(&self) -> &'static str {
        match self {
            BracketStyle::Spaced => " (",
            BracketStyle::Compact => "(",
        }
    }

    fn separator(&self) -> &'static str {
        match self {
            BracketStyle::Spaced => ", ",
            BracketStyle::Compact => ",",
        }
    }
}

/// Returns the bracket notation of the tree, formatting values with [Display].
///
/// See [to_bracket_with] for details.
///
/// # Example
/// ```
/// use bracktree::bracket::{to_bracket, BracketStyle};
/// use bracktree::model::{Node, Tree};
///
/// let tree = Tree::from_root(Node::new(1).with_left(Node::new(2)).with_right(Node::new(3)));
/// assert_eq!(to_bracket(&tree, BracketStyle::Spaced).unwrap(), "1 (2, 3)");
/// assert_eq!(to_bracket(&tree, BracketStyle::Compact).unwrap(), "1(2,3)");
/// ```
pub fn to_bracket<T: Display>(tree: &Tree<T>, style: BracketStyle) -> Result<String, ParsingError> {
    to_bracket_with(tree, style, |value| value.to_string())
}

/// Returns the bracket notation of the tree, formatting values with `formatter`.
///
/// The formatter is called once per node in pre-order, so it may keep state.
///
/// A node is written as its value, followed by `(left)` if it has one child
/// or `(left, right)` if it has two. The empty tree is written as `""`.
/// A node with only a right child is written with an empty left slot,
/// `value (, right)`, which the parser rejects; check
/// [Tree::has_right_only_nodes] beforehand if that matters.
///
/// # Errors
/// `InvalidValue` if a formatted value is empty or contains whitespace or a
/// structural character (`(`, `)`, `,`), since the output could not be parsed
/// back. The error position is the pre-order index of the offending node.
pub fn to_bracket_with<T, F>(tree: &Tree<T>, style: BracketStyle, mut formatter: F) -> Result<String, ParsingError>
where
    F: FnMut(&T) -> String,
{
    let mut out = String::with_capacity(tree.num_nodes() * ESTIMATED_CHARS_PER_NODE);

    // Pending output, last item first; nodes are popped in pre-order
    let mut stack: Vec<Pending<'_, T>> = tree.root().map(Pending::Node).into_iter().collect();
    let mut index = 0;

    while let Some(item) = stack.pop() {
        let node = match item {
            Pending::Text(text) => {
                out.push_str(text);
                continue;
            }
            Pending::Node(node) => node,
        };

        let token = formatter(node.value());
        check_token(&token, index)?;
        index += 1;
        out.push_str(&token);

        if !node.is_leaf() {
            stack.push(Pending::Text(")"));
            if let Some(right) = node.right() {
                stack.push(Pending::Node(right));
                stack.push(Pending::Text(style.separator()));
            }
            if let Some(left) = node.left() {
                stack.push(Pending::Node(left));
            }
            stack.push(Pending::Text(style.open()));
        }
    }

    Ok(out)
}

enum Pending<'a, T> {
    Node(&'a Node<T>),
    Text(&'static str),
}

/// Checks that a formatted value is a single token the parser would read back.
fn check_token(token: &str, index: usize) -> Result<(), ParsingError> {
    let problem = if token.is_empty() {
        Some("formatted value is empty".to_string())
    } else {
        token
            .bytes()
            .find(|b| b.is_ascii_whitespace() || STRUCTURAL_DELIMITERS.contains(b))
            .map(|b| format!("formatted value '{token}' contains {:?}", b as char))
    };

    match problem {
        Some(msg) => Err(ParsingError::without_context(ParsingErrorType::InvalidValue(msg), index)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_token() {
        assert!(check_token("-12", 0).is_ok());
        assert!(check_token("", 0).unwrap_err().is_invalid_value());

        let err = check_token("a b", 4).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn test_invalid_formatted_value_reports_pre_order_index() {
        let tree = Tree::from_root(
            Node::new("root").with_left(Node::new("ok")).with_right(Node::new("not,ok")),
        );
        let err = to_bracket(&tree, BracketStyle::Spaced).unwrap_err();
        assert!(err.is_invalid_value());
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn test_right_only_node_written_with_empty_left_slot() {
        let tree = Tree::from_root(Node::new(1).with_right(Node::new(3)));
        assert_eq!(to_bracket(&tree, BracketStyle::Spaced).unwrap(), "1 (, 3)");
        assert_eq!(to_bracket(&tree, BracketStyle::Compact).unwrap(), "1(,3)");
    }

    #[test]
    fn test_stateful_formatter_numbers_nodes_in_pre_order() {
        let tree = Tree::from_root(
            Node::new('a').with_left(Node::new('b').with_left(Node::new('c'))).with_right(Node::new('d')),
        );
        let mut counter = 0;
        let text = to_bracket_with(&tree, BracketStyle::Compact, |v| {
            counter += 1;
            format!("{v}{counter}")
        })
        .unwrap();
        assert_eq!(text, "a1(b2(c3),d4)");
        assert_eq!(counter, 4);
    }

    #[test]
    fn test_custom_formatter() {
        let tree = Tree::from_root(Node::new(255u8).with_left(Node::new(16)));
        let hex = to_bracket_with(&tree, BracketStyle::Compact, |v| format!("{v:#x}")).unwrap();
        assert_eq!(hex, "0xff(0x10)");
    }
}
