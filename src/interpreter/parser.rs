/// Recursive-descent parsing of S-expressions.
///
/// Contains the `parse` entry point, which enforces the single-expression
/// policy, and the recursive routine that builds atoms and lists.
pub mod core;

/// Token cursor used by the parser.
///
/// Owns the token sequence and hands out tokens one at a time through `peek`
/// and `advance`, so every token is consumed exactly once.
pub mod cursor;
