/// Core evaluation logic and the operator environment.
///
/// Contains the `Environment` registry, the recursive evaluation of atoms and
/// lists, and the evaluator's result type.
pub mod core;

/// Builtin function evaluation.
///
/// Defines the builtin table, arity checking, and the arithmetic builtins
/// themselves.
pub mod function;
