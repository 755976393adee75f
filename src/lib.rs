//! Bracktree is a library for generic binary trees, their traversals, and a
//! textual bracket notation.
//!
//! Core functionality provided:
//! - Tree model: [Tree] owns an optional root [Node]; nodes own their
//!   optional left and right subtrees (no parent references).
//! - Traversals: pre-order, in-order, post-order and level-order, each as a
//!   recursive visitor walk with depth information and as a lazy iterator
//!   built on an explicit stack or queue. See [crate::traversal].
//! - Bracket notation: parse `1 (2 (4, 5), 3)` into a tree with any value
//!   parser, and write it back with any value formatter.
//!   See [crate::bracket].
//! - Structural edit: remove nodes with exactly one child, promoting the child.
//!   See [crate::edit].
//! - Rendering boundary: the [Renderer](render::Renderer) trait and a text
//!   outline renderer. See [crate::render].
//!
//! Limitations:
//! - Trees are not balanced or otherwise kept in any order
//! - A node with a right but no left child cannot be written losslessly in
//!   bracket notation
//!
//! # Usage patterns
//!
//! ## Quick API
//! ```
//! use bracktree::{parse_bracket_str, to_bracket_str};
//!
//! let mut tree = parse_bracket_str::<i32>("1 (2 (4), 3)").unwrap();
//! let post: Vec<i32> = tree.post_order_iter().copied().collect();
//! assert_eq!(post, vec![4, 2, 3, 1]);
//!
//! tree.delete_one_child_nodes();
//! assert_eq!(to_bracket_str(&tree).unwrap(), "1 (4, 3)");
//! ```
//!
//! ## Parser configuration
//! ```
//! use bracktree::bracket::BracketParser;
//! use bracktree::traversal::TraversalOrder;
//!
//! let mut parser = BracketParser::new(|token: &str| {
//!     token.chars().next().ok_or("empty token")
//! })
//! .with_max_depth(64);
//!
//! let tree = parser.parse_str("a (b (d), c)")?;
//! tree.visit(TraversalOrder::LevelOrder, |value, depth| println!("{value} (level {depth})"));
//! # Ok::<(), bracktree::parser::ParsingError>(())
//! ```

pub mod bracket;
pub mod edit;
pub mod model;
pub mod parser;
pub mod render;
pub mod traversal;

pub use crate::model::{DisplayColor, Node, Tree, TreeError};
pub use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
pub use crate::traversal::TraversalOrder;

use crate::bracket::BracketStyle;
use std::fmt::Display;
use std::str::FromStr;

// ============================================================================
// Quick bracket notation API
// ============================================================================
/// Parse a bracket notation string using default settings,
/// converting values via [FromStr].
///
/// See [`bracket::parse_str`] for full documentation.
pub fn parse_bracket_str<T>(text: &str) -> Result<Tree<T>, ParsingError>
where
    T: FromStr,
    T::Err: Display,
{
    bracket::parse_str(text)
}

/// Returns the bracket notation of a tree in [BracketStyle::Spaced] style,
/// formatting values with [Display].
///
/// See [`bracket::to_bracket`] for full documentation.
pub fn to_bracket_str<T: Display>(tree: &Tree<T>) -> Result<String, ParsingError> {
    bracket::to_bracket(tree, BracketStyle::Spaced)
}
