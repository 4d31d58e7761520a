use std::fmt;

use logos::Logos;

/// Raw token produced by logos before atoms are classified.
///
/// Every input character is covered by one of the patterns below, so the raw
/// lexer has no error case in practice.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0B\f]+")]
enum RawToken {
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// Any run of characters that are neither whitespace nor parentheses.
    #[regex(r"[^ \t\r\n\x0B\f()]+")]
    Word,
}

/// Represents a lexical token in the source input.
///
/// Parentheses are always split off into their own tokens. Everything else
/// between whitespace becomes either a `Number` or a `Symbol`.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A word that parses fully as a floating-point literal, such as `3`,
    /// `-2.5`, `.5` or `1e-3`.
    Number(f64),
    /// Any other word, such as `+`, `foo` or `1x`.
    Symbol(String),
}

/// Splits source text into tokens.
///
/// This function never fails: text that is not a number is kept verbatim as a
/// symbol and validated later, when (and if) it is evaluated.
///
/// # Example
/// ```
/// use lispcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(+ 1 2.5)");
/// assert_eq!(tokens,
///            vec![Token::OpenParen,
///                 Token::Symbol("+".to_string()),
///                 Token::Number(1.0),
///                 Token::Number(2.5),
///                 Token::CloseParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        let slice = lexer.slice();
        let token = match raw {
            Ok(RawToken::OpenParen) => Token::OpenParen,
            Ok(RawToken::CloseParen) => Token::CloseParen,
            Ok(RawToken::Word) | Err(()) => classify_word(slice),
        };
        tokens.push(token);
    }

    tracing::trace!(count = tokens.len(), "tokenized input");
    tokens
}

/// Turns a word into a `Number` if the whole word is a float literal, or a
/// `Symbol` otherwise.
///
/// # Parameters
/// - `word`: A non-empty slice without whitespace or parentheses.
///
/// # Returns
/// The classified token.
fn classify_word(word: &str) -> Token {
    word.parse::<f64>()
        .map_or_else(|_| Token::Symbol(word.to_string()), Token::Number)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(s) => write!(f, "{s}"),
        }
    }
}
