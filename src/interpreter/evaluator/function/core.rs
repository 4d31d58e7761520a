use std::fmt;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, function::arithmetic},
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the name it was
/// invoked under (for error reporting). It returns the computed value wrapped
/// in `EvalResult`.
pub type BuiltinFn = fn(&[Value], &str) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
/// - `Any` means every argument count, including zero, is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
            Self::Any => true,
        }
    }

    /// Builds the error reported when `name` is called with `found` arguments.
    #[must_use]
    pub fn mismatch(self, name: &str, found: usize) -> EvalError {
        EvalError::ArityError { name: name.to_string(),
                                expected: self,
                                found }
    }

    /// Checks `args` against this arity.
    ///
    /// # Errors
    /// Returns `ArityError` if the argument count is not accepted.
    pub fn check_args(self, name: &str, args: &[Value]) -> EvalResult<()> {
        if self.check(args.len()) {
            Ok(())
        } else {
            Err(self.mismatch(name, args.len()))
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::Any => write!(f, "any number of"),
        }
    }
}

/// A registered builtin: its accepted arity and its implementation.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// Argument counts the builtin accepts.
    pub arity: Arity,
    /// The function implementing the builtin.
    pub func:  BuiltinFn,
}

impl Builtin {
    /// Checks the arity and then runs the builtin.
    ///
    /// # Parameters
    /// - `name`: The name the builtin was invoked under.
    /// - `args`: Evaluated arguments, in source order.
    ///
    /// # Returns
    /// The builtin's result, or `ArityError` if the argument count is rejected.
    pub fn apply(&self, name: &str, args: &[Value]) -> EvalResult<Value> {
        self.arity.check_args(name, args)?;
        (self.func)(args, name)
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (registration metadata),
/// - `BUILTIN_TABLE` (static table used to populate new environments),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub(crate) struct BuiltinDef {
            pub(crate) name:  &'static str,
            pub(crate) arity: Arity,
            pub(crate) func:  BuiltinFn,
        }
        pub(crate) static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "+" => { arity: Arity::Any,        func: arithmetic::add },
    "-" => { arity: Arity::AtLeast(1), func: arithmetic::sub },
    "*" => { arity: Arity::Any,        func: arithmetic::mul },
    "/" => { arity: Arity::AtLeast(1), func: arithmetic::div },
}
