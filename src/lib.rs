//! # lispcalc
//!
//! lispcalc is a small interpreter for an S-expression language restricted to
//! floating-point arithmetic. Source text goes through three phases:
//! tokenize, parse, and evaluate against an environment of builtin operators.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Environment, lexer::tokenize, parser::core::parse, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Atom` types that represent an
/// S-expression as a tree. The tree is built by the parser and traversed by
/// the evaluator. Both types print back to canonical source text.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines every failure the pipeline can report. Tokenizing never
/// fails; parse errors and evaluation errors each have their own enum, and
/// `Error` wraps both for callers that run the whole pipeline.
pub mod error;
/// Orchestrates the process of interpreting an expression.
///
/// This module ties together the lexer, parser, evaluator, and value types.
///
/// # Responsibilities
/// - Turns source text into tokens and tokens into a single expression tree.
/// - Evaluates the tree against an operator environment.
/// - Keeps each phase's data and errors separate.
pub mod interpreter;

/// Evaluates `source` with a fresh environment holding the default builtins.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use lispcalc::{get_result, interpreter::value::core::Value};
///
/// assert_eq!(get_result("(+ 1 2)").unwrap(), Value::new(3.0));
/// assert_eq!(get_result("(/ 1 0)").unwrap(), Value::new(f64::INFINITY));
///
/// // Unknown operators are reported rather than evaluated.
/// assert!(get_result("(foo 1 2)").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Error> {
    get_result_with(source, &Environment::new())
}

/// Evaluates `source` against an existing environment.
///
/// Use this when one environment serves a whole session, for example a
/// read-eval-print loop. A failing input leaves `env` untouched.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
pub fn get_result_with(source: &str, env: &Environment) -> Result<Value, Error> {
    let expr = parse(tokenize(source))?;
    Ok(env.eval(&expr)?)
}
