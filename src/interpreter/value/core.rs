use std::ops::{Add, Div, Mul, Neg, Sub};

/// Represents a runtime value in the interpreter.
///
/// Arithmetic on values follows IEEE-754 double semantics, so dividing by zero
/// yields an infinity or `NaN` instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Value(f64);

impl Value {
    /// Wraps a raw `f64`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64`.
    #[must_use]
    pub const fn as_real(self) -> f64 {
        self.0
    }

    /// Returns `true` if the value is `NaN`.
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Compares two values with a relative tolerance.
    ///
    /// Equal infinities compare equal; `NaN` never does.
    ///
    /// # Example
    /// ```
    /// use lispcalc::interpreter::value::core::Value;
    ///
    /// let a = Value::new(0.1 + 0.2);
    /// assert!(a.approx_eq(Value::new(0.3), 1e-12));
    /// assert!(!a.approx_eq(Value::new(0.31), 1e-12));
    /// ```
    #[must_use]
    pub fn approx_eq(self, other: Self, rel_tolerance: f64) -> bool {
        if self.0 == other.0 {
            return true;
        }
        let scale = self.0.abs().max(other.0.abs());
        (self.0 - other.0).abs() <= rel_tolerance * scale
    }
}

impl Add for Value {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Value {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Value {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Value {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Value {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
