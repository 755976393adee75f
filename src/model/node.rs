//! Node module for binary tree representation.

// =#========================================================================#=
// DISPLAY COLOR
// =#========================================================================#=
/// Display attribute of a [Node], only read by [Renderer](crate::render::Renderer)s.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash)]
pub enum DisplayColor {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Gray,
}

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A node of a binary tree, owning its optional left and right subtrees.
///
/// # Invariants
/// - Each node is owned by exactly one parent, or by the [Tree](crate::model::Tree) if it is the root
/// - No parent back-references are stored, so a tree is acyclic by construction
///
/// # Example
/// ```
/// use bracktree::model::Node;
///
/// // 1 (2, 3)
/// let node = Node::new(1)
///     .with_left(Node::new(2))
///     .with_right(Node::new(3));
///
/// assert_eq!(node.num_children(), 2);
/// assert_eq!(node.left().map(Node::value), Some(&2));
/// ```
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
    pub(crate) color: DisplayColor,
}

impl<T> Node<T> {
    /// Creates a new leaf holding `value`, with the default [DisplayColor].
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            color: DisplayColor::default(),
        }
    }

    /// Creates a new node with the given (optional) children.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
            color: DisplayColor::default(),
        }
    }

    /// Sets the left child, replacing any previous left subtree.
    pub fn with_left(mut self, left: Node<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Sets the right child, replacing any previous right subtree.
    pub fn with_right(mut self, right: Node<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: DisplayColor) -> Self {
        self.color = color;
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node, dropping its subtrees, and returns its value.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    /// Replaces the left subtree, returning the previous one.
    pub fn set_left(&mut self, left: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.left, left.map(Box::new)).map(|node| *node)
    }

    /// Replaces the right subtree, returning the previous one.
    pub fn set_right(&mut self, right: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.right, right.map(Box::new)).map(|node| *node)
    }

    pub fn color(&self) -> DisplayColor {
        self.color
    }

    pub fn set_color(&mut self, color: DisplayColor) {
        self.color = color;
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the number of present children (0, 1 or 2).
    pub fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Returns whether this node has exactly one child.
    pub fn has_one_child(&self) -> bool {
        self.num_children() == 1
    }

    /// Returns whether this node has a right child but no left child,
    /// a shape bracket notation cannot express.
    pub fn is_right_only(&self) -> bool {
        self.left.is_none() && self.right.is_some()
    }

    /// Returns the present children, left before right.
    pub fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.left().into_iter().chain(self.right())
    }
}
