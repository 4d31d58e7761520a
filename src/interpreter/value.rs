/// The runtime value produced by evaluation.
///
/// Evaluation results are double-precision numbers only. Parse-tree nodes
/// never reach this type; the evaluator turns them into numbers (or errors)
/// before any built-in sees them.
pub mod core;
