/// Structural characters of bracket notation; together with whitespace they delimit value tokens.
pub(crate) const STRUCTURAL_DELIMITERS: &[u8] = b"(),";

/// Default limit on nesting depth accepted by the parser (root at depth 0).
pub(crate) const DEFAULT_MAX_DEPTH: usize = 4096;

/// Rough number of characters per node when pre-allocating output: value, separator and parentheses.
pub(crate) const ESTIMATED_CHARS_PER_NODE: usize = 5;
