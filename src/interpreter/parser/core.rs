use crate::{
    ast::{Atom, Expr},
    error::ParseError,
    interpreter::{lexer::Token, parser::cursor::TokenCursor},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into exactly one expression.
///
/// This is the entry point for parsing. The whole sequence must form a single
/// expression; leftover tokens after it are rejected.
///
/// Grammar: `expression := NUMBER | SYMBOL | "(" expression* ")"`
///
/// # Parameters
/// - `tokens`: Tokens produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - `EmptyInput` if `tokens` is empty.
/// - `UnexpectedCloseParen` for a `)` without a matching `(`.
/// - `UnterminatedList` if the tokens end inside a list.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
///
/// # Example
/// ```
/// use lispcalc::{
///     ast::Expr,
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let expr = parse(tokenize("(- 5)")).unwrap();
/// assert_eq!(expr, Expr::List(vec![Expr::symbol("-"), Expr::number(5.0)]));
///
/// assert_eq!(parse(tokenize("(+ 1 2")), Err(ParseError::UnterminatedList));
/// ```
pub fn parse(tokens: Vec<Token>) -> ParseResult<Expr> {
    let mut cursor = TokenCursor::new(tokens);

    if cursor.is_exhausted() {
        return Err(ParseError::EmptyInput);
    }

    let expr = parse_expression(&mut cursor)?;

    if let Some(extra) = cursor.peek() {
        return Err(ParseError::UnexpectedTrailingTokens { token: extra.to_string() });
    }

    tracing::trace!(%expr, "parsed expression");
    Ok(expr)
}

/// Parses one expression starting at the cursor.
///
/// Atoms consume a single token. An opening parenthesis starts a list whose
/// elements are parsed recursively until the matching closing parenthesis.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the start of an expression.
///
/// # Returns
/// The parsed atom or list.
pub fn parse_expression(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    match cursor.advance() {
        Some(Token::OpenParen) => parse_list(cursor),
        Some(Token::CloseParen) => Err(ParseError::UnexpectedCloseParen),
        Some(Token::Number(n)) => Ok(Expr::Atom(Atom::number(n))),
        Some(Token::Symbol(name)) => Ok(Expr::Atom(Atom::Symbol(name))),
        None => Err(ParseError::UnterminatedList),
    }
}

/// Parses the elements of a list after its opening parenthesis.
///
/// # Parameters
/// - `cursor`: Token cursor positioned just after `(`.
///
/// # Returns
/// An `Expr::List` with the elements in source order.
fn parse_list(cursor: &mut TokenCursor) -> ParseResult<Expr> {
    let mut items = Vec::new();

    loop {
        match cursor.peek() {
            Some(Token::CloseParen) => {
                cursor.advance();
                return Ok(Expr::List(items));
            },
            Some(_) => items.push(parse_expression(cursor)?),
            None => return Err(ParseError::UnterminatedList),
        }
    }
}
