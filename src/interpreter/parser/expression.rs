use crate::{
    error::EvalResult,
    interpreter::{
        parser::{core::Parser, operator::BinaryOperator},
        value::core::Operand,
    },
};

impl Parser<'_> {
    /// Parses and evaluates an additive expression.
    ///
    /// Grammar: `expression := term (('+' | '-') term)*`
    ///
    /// # Errors
    /// Propagates errors from the operands, and fails if an operand is a
    /// function reference or an empty result.
    pub fn parse_expression(&mut self) -> EvalResult<Operand> {
        let mut value = self.parse_term()?;
        self.cursor.skip_whitespace();

        while let Some(op) = self.cursor.peek().and_then(BinaryOperator::additive) {
            self.cursor.bump();
            let rhs = self.parse_term()?;
            value = op.apply(value.as_value()?, rhs.as_value()?).into();
            self.cursor.skip_whitespace();
        }

        Ok(value)
    }

    /// Parses and evaluates a multiplicative term.
    ///
    /// Grammar: `term := factor (('*' | '/' | '%') factor)*`
    ///
    /// # Errors
    /// Same as [`Parser::parse_expression`].
    pub fn parse_term(&mut self) -> EvalResult<Operand> {
        let mut value = self.parse_factor()?;
        self.cursor.skip_whitespace();

        while let Some(op) = self.cursor.peek().and_then(BinaryOperator::multiplicative) {
            self.cursor.bump();
            let rhs = self.parse_factor()?;
            value = op.apply(value.as_value()?, rhs.as_value()?).into();
            self.cursor.skip_whitespace();
        }

        Ok(value)
    }
}
