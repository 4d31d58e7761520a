use crate::interpreter::evaluator::function::core::Arity;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Tried to evaluate the empty list `()`.
    EmptyExpression,
    /// The head of a list was not a symbol, e.g. `(1 2 3)` or `((+) 1)`.
    OperatorNotSymbol {
        /// The offending head expression, rendered as source text.
        found: String,
    },
    /// The head symbol does not name a registered built-in.
    UnknownOperator {
        /// The name of the operator.
        name: String,
    },
    /// A bare symbol was used where a value was expected.
    SymbolNotAValue {
        /// The name of the symbol.
        name: String,
    },
    /// A built-in received a number of arguments it does not accept.
    ArityError {
        /// The name of the operator.
        name:     String,
        /// The accepted argument counts.
        expected: Arity,
        /// The number of arguments actually supplied.
        found:    usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Evaluation error: Cannot evaluate an empty expression '()'."),
            Self::OperatorNotSymbol { found } => write!(f,
                                                        "Evaluation error: Operator must be a symbol, but found '{found}'."),
            Self::UnknownOperator { name } => {
                write!(f, "Evaluation error: Unknown operator '{name}'.")
            },
            Self::SymbolNotAValue { name } => write!(f,
                                                     "Evaluation error: Symbol '{name}' is not a value."),
            Self::ArityError { name, expected, found } => write!(f,
                                                                 "Evaluation error: '{name}' expects {expected} argument(s), but found {found}."),
        }
    }
}

impl std::error::Error for EvalError {}
