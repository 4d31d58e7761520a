use std::collections::HashMap;

use crate::{
    ast::{Atom, Expr},
    error::EvalError,
    interpreter::{
        evaluator::function::core::{Arity, BUILTIN_TABLE, Builtin, BuiltinFn},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the operator registry used during evaluation.
///
/// The environment maps operator names to builtins. It is created once per
/// interpreter session, populated before the first evaluation and only read
/// afterwards, so a single environment can serve any number of independent
/// evaluations. A failed evaluation never changes it.
///
/// ## Usage
///
/// `Environment::new()` returns a registry holding the four arithmetic
/// builtins `+`, `-`, `*` and `/`. Further builtins can be registered with
/// [`Environment::define`] before evaluation begins.
#[derive(Debug, Clone)]
pub struct Environment {
    builtins: HashMap<String, Builtin>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment pre-populated with the arithmetic builtins.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Self::empty();
        for def in BUILTIN_TABLE {
            env.define(def.name, def.arity, def.func);
        }
        env
    }

    /// Creates an environment without any builtins.
    #[must_use]
    pub fn empty() -> Self {
        Self { builtins: HashMap::new() }
    }

    /// Registers a builtin under `name`.
    ///
    /// Names are unique: registering an existing name replaces its entry, and
    /// the previous entry is returned.
    ///
    /// # Example
    /// ```
    /// use lispcalc::{
    ///     get_result_with,
    ///     interpreter::{
    ///         evaluator::{core::Environment, function::core::Arity},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.define("sqrt", Arity::Exact(1), |args, _| Ok(Value::new(args[0].as_real().sqrt())));
    ///
    /// assert_eq!(get_result_with("(sqrt (* 4 4))", &env).unwrap(), Value::new(4.0));
    /// ```
    pub fn define(&mut self,
                  name: impl Into<String>,
                  arity: Arity,
                  func: BuiltinFn)
                  -> Option<Builtin> {
        self.builtins.insert(name.into(), Builtin { arity, func })
    }

    /// Looks up the builtin registered under `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Builtin> {
        self.builtins.get(name)
    }

    /// Returns the names of all registered builtins in sorted order.
    #[must_use]
    pub fn operators(&self) -> Vec<&str> {
        let mut names = self.builtins.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// - A number atom evaluates to itself.
    /// - A symbol atom outside head position is an error, since there are no
    ///   variables.
    /// - A list is a call: its head must be a symbol, every remaining element
    ///   is evaluated left to right exactly once, and the builtin named by the
    ///   head is applied to the results.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The numeric result of the expression.
    ///
    /// # Errors
    /// - `EmptyExpression` for `()`.
    /// - `OperatorNotSymbol` if a list head is a number or a list.
    /// - `UnknownOperator` if the head symbol is not registered.
    /// - `SymbolNotAValue` for a bare symbol in argument or top-level position.
    /// - `ArityError` if a builtin rejects the number of arguments.
    #[tracing::instrument(level = "trace", skip_all, fields(expr = %expr))]
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Atom(Atom::Number(n)) => Ok(Value::new(n.0)),
            Expr::Atom(Atom::Symbol(name)) => {
                Err(EvalError::SymbolNotAValue { name: name.clone() })
            },
            Expr::List(items) => self.eval_call(items),
        }
    }

    /// Evaluates a list expression as an operator call.
    ///
    /// # Parameters
    /// - `items`: The list elements; the first one names the operator.
    ///
    /// # Returns
    /// The value returned by the builtin.
    fn eval_call(&self, items: &[Expr]) -> EvalResult<Value> {
        let (head, rest) = items.split_first().ok_or(EvalError::EmptyExpression)?;

        let name = head.as_symbol()
                       .ok_or_else(|| EvalError::OperatorNotSymbol { found: head.to_string() })?;

        let args = rest.iter()
                       .map(|arg| self.eval(arg))
                       .collect::<EvalResult<Vec<_>>>()?;

        let builtin =
            self.lookup(name)
                .ok_or_else(|| EvalError::UnknownOperator { name: name.to_string() })?;

        tracing::debug!(operator = name, argc = args.len(), "applying builtin");
        builtin.apply(name, &args)
    }
}

/// Evaluates `expr` against `env`.
///
/// Free-function form of [`Environment::eval`].
///
/// # Example
/// ```
/// use lispcalc::{
///     interpreter::{
///         evaluator::core::{Environment, eval},
///         lexer::tokenize,
///         parser::core::parse,
///         value::core::Value,
///     },
/// };
///
/// let env = Environment::new();
/// let expr = parse(tokenize("(* 2 (+ 1 2))")).unwrap();
/// assert_eq!(eval(&expr, &env).unwrap(), Value::new(6.0));
/// ```
pub fn eval(expr: &Expr, env: &Environment) -> EvalResult<Value> {
    env.eval(expr)
}
