use std::{iter::Peekable, vec::IntoIter};

use crate::interpreter::lexer::Token;

/// An owned, forward-only view over a token sequence.
#[derive(Debug)]
pub struct TokenCursor {
    tokens: Peekable<IntoIter<Token>>,
}

impl TokenCursor {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens: tokens.into_iter().peekable() }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<Token> {
        self.tokens.next()
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_exhausted(&mut self) -> bool {
        self.tokens.peek().is_none()
    }
}
