#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum ParseError {
    /// There were no tokens to parse.
    EmptyInput,
    /// A closing parenthesis `)` appeared without a matching `(`.
    UnexpectedCloseParen,
    /// The input ended while a list was still open.
    UnterminatedList,
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first token that was not consumed.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Parse error: Nothing to parse."),
            Self::UnexpectedCloseParen => {
                write!(f, "Parse error: Unexpected closing parenthesis ')'.")
            },
            Self::UnterminatedList => write!(f,
                                             "Parse error: Expected closing parenthesis ')' but reached the end of input."),
            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Parse error: Extra tokens after expression, starting at '{token}'."),
        }
    }
}

impl std::error::Error for ParseError {}
