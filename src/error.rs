/// Parsing errors.
///
/// Defines the errors the parser reports while turning a token sequence into an
/// expression tree: missing input, unbalanced parentheses and leftover tokens.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// tree against an environment, such as unknown operators, empty expressions
/// and arity mismatches.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure of the tokenize, parse and evaluate pipeline.
///
/// The tokenizer never fails, so only the two later phases contribute
/// variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed into a single expression.
    Parse(ParseError),
    /// The expression was parsed but could not be evaluated.
    Eval(EvalError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
