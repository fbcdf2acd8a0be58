use std::fmt;

use crate::{
    error::{EvalResult, SemanticError},
    interpreter::{
        function::core::Builtin,
        value::number::{format_number, parse_number},
    },
};

/// Represents a runtime value.
///
/// Values are what variables hold and what a statement displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A string, produced by a `"..."` literal or by concatenation.
    Str(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl Value {
    /// Converts the value to a number.
    ///
    /// Strings are coerced with [`parse_number`], so unparseable text gives
    /// `NaN` rather than an error.
    ///
    /// # Example
    /// ```
    /// use classhub::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("2.5").to_number(), 2.5);
    /// assert!(Value::from("two").to_number().is_nan());
    /// ```
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Str(s) => parse_number(s),
        }
    }

    /// Adds two values.
    ///
    /// If either side is a string the display forms are concatenated;
    /// otherwise the numbers are summed.
    ///
    /// # Example
    /// ```
    /// use classhub::interpreter::value::core::Value;
    ///
    /// let sum = Value::from(1.0).add(&Value::from(2.0));
    /// assert_eq!(sum, Value::Number(3.0));
    ///
    /// let joined = Value::from("x = ").add(&Value::from(4.0));
    /// assert_eq!(joined, Value::from("x = 4"));
    /// ```
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Number(a), Self::Number(b)) => Self::Number(a + b),
            _ => Self::Str(format!("{self}{rhs}")),
        }
    }

    /// Subtracts after coercing both sides to numbers.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::Number(self.to_number() - rhs.to_number())
    }

    /// Multiplies after coercing both sides to numbers.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::Number(self.to_number() * rhs.to_number())
    }

    /// Divides after coercing both sides to numbers.
    ///
    /// Division by zero follows IEEE 754 and yields an infinity or `NaN`.
    #[must_use]
    pub fn div(&self, rhs: &Self) -> Self {
        Self::Number(self.to_number() / rhs.to_number())
    }

    /// Takes the floating-point remainder after coercing both sides to
    /// numbers. The result has the sign of the dividend.
    #[must_use]
    pub fn rem(&self, rhs: &Self) -> Self {
        Self::Number(self.to_number() % rhs.to_number())
    }

    /// Negates after coercing to a number.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::Number(-self.to_number())
    }
}

/// The result of evaluating any grammar rule.
///
/// Besides plain values, a rule can produce a reference to a builtin (a bare
/// function name such as `sqrt`) or nothing at all (a call to a function that
/// only has side effects, such as `print`). Only values may flow into
/// operators, assignments and most function arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A number or string.
    Value(Value),
    /// A builtin referenced by name without being called.
    Function(&'static Builtin),
    /// The empty result of the named builtin.
    Nothing(&'static Builtin),
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl Operand {
    /// Borrows the value, or fails if this operand is not one.
    ///
    /// # Errors
    /// - `FunctionAsValue` for a function reference.
    /// - `NoValue` for the empty result of a side-effecting call.
    pub fn as_value(&self) -> EvalResult<&Value> {
        match self {
            Self::Value(v) => Ok(v),
            Self::Function(builtin) => {
                Err(SemanticError::FunctionAsValue { name: builtin.name.to_string() }.into())
            },
            Self::Nothing(builtin) => {
                Err(SemanticError::NoValue { name: builtin.name.to_string() }.into())
            },
        }
    }

    /// Takes the value out, or fails if this operand is not one.
    ///
    /// # Errors
    /// Same as [`Operand::as_value`].
    pub fn into_value(self) -> EvalResult<Value> {
        match self {
            Self::Value(v) => Ok(v),
            other => other.as_value().cloned(),
        }
    }
}
