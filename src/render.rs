//! Rendering boundary.
//!
//! A [Renderer] turns a tree into some drawable representation bottom-up:
//! every node is drawn from its value, the drawables of its (optional)
//! children, and its [DisplayColor]. How a drawable looks (pixels, SVG, text)
//! is entirely up to the renderer.
//!
//! [TextRenderer] draws an indented outline, e.g. for `1 (2 (4, 5), 3)`:
//! ```text
//! 1
//! ├─ 2
//! │  ├─ 4
//! │  └─ 5
//! └─ 3
//! ```

use crate::model::{DisplayColor, Node, Tree, TreeError};
use std::fmt::Display;

/// Draws a tree node by node, children before parents.
pub trait Renderer<T> {
    type Drawable;

    /// Draws a single node given the drawables of its children.
    fn draw_node(
        &mut self,
        value: &T,
        left: Option<Self::Drawable>,
        right: Option<Self::Drawable>,
        color: DisplayColor,
    ) -> Self::Drawable;
}

/// Renders the tree with the given renderer, recursing once per level.
///
/// # Errors
/// [TreeError::EmptyTree] if there is nothing to draw.
pub fn render<T, R: Renderer<T>>(tree: &Tree<T>, renderer: &mut R) -> Result<R::Drawable, TreeError> {
    fn draw<T, R: Renderer<T>>(node: &Node<T>, renderer: &mut R) -> R::Drawable {
        let left = node.left().map(|child| draw(child, renderer));
        let right = node.right().map(|child| draw(child, renderer));
        renderer.draw_node(node.value(), left, right, node.color())
    }

    let root = tree.try_root()?;
    Ok(draw(root, renderer))
}

// =#========================================================================#=
// TEXT RENDERER
// =#========================================================================#=
/// Renders a tree as lines of an indented outline.
///
/// A missing left child of a right-only node is drawn as `·` so left and
/// right stay distinguishable. Non-default colors are appended as `[color]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    show_colors: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `[color]` to nodes whose color is not the default.
    pub fn with_colors(mut self) -> Self {
        self.show_colors = true;
        self
    }

    /// Renders the tree into a single string, one node per line.
    /// The empty tree renders as `""`.
    pub fn render_to_string<T: Display>(&mut self, tree: &Tree<T>) -> String {
        match render(tree, self) {
            Ok(lines) => lines.join("\n"),
            Err(TreeError::EmptyTree) => String::new(),
        }
    }
}

impl<T: Display> Renderer<T> for TextRenderer {
    type Drawable = Vec<String>;

    fn draw_node(
        &mut self,
        value: &T,
        left: Option<Vec<String>>,
        right: Option<Vec<String>>,
        color: DisplayColor,
    ) -> Vec<String> {
        let mut head = value.to_string();
        if self.show_colors && color != DisplayColor::default() {
            head.push_str(&format!(" [{color:?}]").to_lowercase());
        }

        let mut lines = vec![head];
        match (left, right) {
            (None, None) => {}
            (Some(only), None) => attach(&mut lines, only, true),
            (left, Some(right)) => {
                attach(&mut lines, left.unwrap_or_else(|| vec!["·".to_string()]), false);
                attach(&mut lines, right, true);
            }
        }
        lines
    }
}

/// Appends a child's lines below its parent with box-drawing connectors.
fn attach(lines: &mut Vec<String>, child: Vec<String>, is_last: bool) {
    let (connector, continuation) = if is_last { ("└─ ", "   ") } else { ("├─ ", "│  ") };
    for (i, line) in child.into_iter().enumerate() {
        let prefix = if i == 0 { connector } else { continuation };
        lines.push(format!("{prefix}{line}"));
    }
}
