use std::fmt;

use ordered_float::OrderedFloat;

/// A leaf of the expression tree.
///
/// Atoms are produced directly from `Number` and `Symbol` tokens. Numbers are
/// stored as [`OrderedFloat`] so that whole trees can be compared structurally,
/// including trees that contain `NaN` literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// A numeric literal such as `42`, `-1.5` or `2e10`.
    Number(OrderedFloat<f64>),
    /// A bare symbol such as `+` or `foo`. Symbols only have meaning in the
    /// head position of a list, where they name a built-in.
    Symbol(String),
}

impl Atom {
    /// Creates a numeric atom.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    /// Creates a symbol atom.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }
}

/// A node of the parse tree.
///
/// The tree is built by the parser and is read-only during evaluation.
/// Empty lists are accepted by the parser and rejected by the evaluator.
///
/// # Example
/// ```
/// use lispcalc::ast::{Atom, Expr};
///
/// let expr = Expr::List(vec![Expr::Atom(Atom::symbol("+")),
///                            Expr::Atom(Atom::number(1.0)),
///                            Expr::Atom(Atom::number(2.0))]);
/// assert_eq!(expr.to_string(), "(+ 1 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A number or a symbol.
    Atom(Atom),
    /// A parenthesized sequence of expressions.
    List(Vec<Self>),
}

impl Expr {
    /// Shorthand for `Expr::Atom(Atom::number(value))`.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Atom(Atom::number(value))
    }

    /// Shorthand for `Expr::Atom(Atom::symbol(name))`.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Atom(Atom::symbol(name))
    }

    /// Returns the symbol name if this expression is a symbol atom.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Atom(Atom::Symbol(name)) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n.0),
            Self::Symbol(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::List(items) => {
                write!(f, "(")?;

                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{item}")?;
                }

                write!(f, ")")
            },
        }
    }
}
