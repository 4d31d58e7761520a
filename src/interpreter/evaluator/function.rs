/// Builtin registration and arity checking.
///
/// Declares the builtin function signature, the `Arity` constraints, and the
/// static table every new environment is populated from.
pub mod core;

/// The arithmetic builtins `+`, `-`, `*` and `/`.
pub mod arithmetic;
