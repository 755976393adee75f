//! Data model for binary trees.
//!
//! A [Tree] owns an optional root [Node]; each [Node] owns its optional left
//! and right subtrees. There are no parent references, so ownership alone
//! guarantees the structure is acyclic and every node has a single owner.
//!
//! Nodes carry a [DisplayColor] for renderers; traversal, codec and edit
//! code never looks at it.

pub mod node;
pub mod tree;

pub use node::{DisplayColor, Node};
pub use tree::{Tree, TreeError};
