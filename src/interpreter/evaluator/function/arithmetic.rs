use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::Arity},
    value::core::Value,
};

/// Sums all arguments.
///
/// With no arguments the result is the additive identity `0`.
///
/// # Example
/// ```
/// use lispcalc::interpreter::{evaluator::function::arithmetic::add, value::core::Value};
///
/// let r = add(&[Value::new(1.0), Value::new(2.0), Value::new(3.5)], "+").unwrap();
/// assert_eq!(r, Value::new(6.5));
/// assert_eq!(add(&[], "+").unwrap(), Value::new(0.0));
/// ```
#[allow(clippy::unnecessary_wraps)]
pub fn add(args: &[Value], _name: &str) -> EvalResult<Value> {
    Ok(args.iter().fold(Value::new(0.0), |acc, &v| acc + v))
}

/// Negates a single argument, or subtracts the remaining arguments from the
/// first one, left to right.
///
/// # Errors
/// Returns `ArityError` when called without arguments.
///
/// # Example
/// ```
/// use lispcalc::interpreter::{evaluator::function::arithmetic::sub, value::core::Value};
///
/// assert_eq!(sub(&[Value::new(5.0)], "-").unwrap(), Value::new(-5.0));
/// let r = sub(&[Value::new(10.0), Value::new(3.0), Value::new(2.0)], "-").unwrap();
/// assert_eq!(r, Value::new(5.0));
/// ```
pub fn sub(args: &[Value], name: &str) -> EvalResult<Value> {
    match args {
        [] => Err(Arity::AtLeast(1).mismatch(name, 0)),
        [only] => Ok(-*only),
        [first, rest @ ..] => Ok(rest.iter().fold(*first, |acc, &v| acc - v)),
    }
}

/// Multiplies all arguments.
///
/// With no arguments the result is the multiplicative identity `1`.
#[allow(clippy::unnecessary_wraps)]
pub fn mul(args: &[Value], _name: &str) -> EvalResult<Value> {
    Ok(args.iter().fold(Value::new(1.0), |acc, &v| acc * v))
}

/// Takes the reciprocal of a single argument, or divides the first argument by
/// each of the remaining ones, left to right.
///
/// Division by zero is not an error: it produces `inf`, `-inf` or `NaN`.
///
/// # Errors
/// Returns `ArityError` when called without arguments.
///
/// # Example
/// ```
/// use lispcalc::interpreter::{evaluator::function::arithmetic::div, value::core::Value};
///
/// assert_eq!(div(&[Value::new(4.0)], "/").unwrap(), Value::new(0.25));
/// assert_eq!(div(&[Value::new(1.0), Value::new(0.0)], "/").unwrap(),
///            Value::new(f64::INFINITY));
/// ```
pub fn div(args: &[Value], name: &str) -> EvalResult<Value> {
    match args {
        [] => Err(Arity::AtLeast(1).mismatch(name, 0)),
        [only] => Ok(Value::new(1.0) / *only),
        [first, rest @ ..] => Ok(rest.iter().fold(*first, |acc, &v| acc / v)),
    }
}
