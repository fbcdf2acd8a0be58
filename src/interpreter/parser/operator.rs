use crate::interpreter::value::core::Value;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`: numeric addition, or concatenation when a string is involved.
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}

impl BinaryOperator {
    /// Recognizes an additive operator (`+` or `-`).
    #[must_use]
    pub const fn additive(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            _ => None,
        }
    }

    /// Recognizes a multiplicative operator (`*`, `/` or `%`).
    #[must_use]
    pub const fn multiplicative(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Rem),
            _ => None,
        }
    }

    /// Combines two values.
    ///
    /// # Example
    /// ```
    /// use classhub::interpreter::{parser::operator::BinaryOperator, value::core::Value};
    ///
    /// let r = BinaryOperator::Rem.apply(&Value::Number(-7.0), &Value::Number(3.0));
    /// assert_eq!(r, Value::Number(-1.0));
    /// ```
    #[must_use]
    pub fn apply(self, lhs: &Value, rhs: &Value) -> Value {
        match self {
            Self::Add => lhs.add(rhs),
            Self::Sub => lhs.sub(rhs),
            Self::Mul => lhs.mul(rhs),
            Self::Div => lhs.div(rhs),
            Self::Rem => lhs.rem(rhs),
        }
    }
}
