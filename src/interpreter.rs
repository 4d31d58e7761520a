/// The evaluator module computes results from expression trees.
///
/// The evaluator walks the tree produced by the parser, resolves operator
/// symbols in the environment, evaluates arguments left to right, and applies
/// builtins to the results.
///
/// # Responsibilities
/// - Owns the operator registry (`Environment`) and the builtin table.
/// - Evaluates atoms and calls, reporting errors such as unknown operators or
///   arity mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a flat
/// sequence of tokens: parentheses, numbers, and symbols. This is the first
/// stage of interpretation and never fails.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser consumes the token sequence with a recursive-descent cursor and
/// produces exactly one expression, reporting unbalanced parentheses and
/// leftover input.
pub mod parser;
/// The value module defines the runtime data type for evaluation.
///
/// Evaluation produces double-precision numbers; this module wraps them and
/// implements the arithmetic the builtins rely on.
pub mod value;
