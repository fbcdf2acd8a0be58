use crate::{
    error::{EvalResult, SemanticError, SyntaxError},
    interpreter::{
        function::core::lookup,
        parser::{core::Parser, literal::is_identifier_char},
        value::core::{Operand, Value},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_> {
    /// Parses and evaluates a factor.
    ///
    /// Grammar:
    /// ```text
    /// factor := '"' chars '"'
    ///         | '+' factor
    ///         | '-' factor
    ///         | identifier ['(' (expression (',' expression)*)? ')']
    ///         | '(' expression ')'
    ///         | number
    /// ```
    ///
    /// Unary `+` passes its operand through untouched; unary `-` coerces it
    /// to a number and negates it.
    ///
    /// # Errors
    /// - Syntax errors from the literal scanners or a missing `)`.
    /// - Semantic errors from identifier resolution and function calls.
    pub fn parse_factor(&mut self) -> EvalResult<Operand> {
        ensure_sufficient_stack(|| {
            self.cursor.skip_whitespace();

            match self.cursor.peek() {
                Some('"') => Ok(Value::Str(self.parse_string()?).into()),
                Some('+') => {
                    self.cursor.bump();
                    self.parse_factor()
                },
                Some('-') => {
                    self.cursor.bump();
                    let operand = self.parse_factor()?;
                    Ok(operand.as_value()?.neg().into())
                },
                Some(c) if is_identifier_char(c) => self.parse_identifier_factor(),
                Some('(') => {
                    self.cursor.bump();
                    let value = self.parse_expression()?;
                    self.cursor.skip_whitespace();
                    self.expect_closing_paren()?;
                    Ok(value)
                },
                _ => Ok(Value::Number(self.parse_number()?).into()),
            }
        })
    }

    /// Parses an identifier and what follows it.
    ///
    /// Followed by `(`, the identifier is a call: the arguments are evaluated
    /// left to right and the builtin of that name is invoked. Otherwise it is
    /// resolved as a variable first and a function reference second.
    fn parse_identifier_factor(&mut self) -> EvalResult<Operand> {
        let name = self.parse_identifier()?;
        self.cursor.skip_whitespace();

        if self.cursor.eat('(') {
            let args = self.parse_arguments()?;
            let builtin = lookup(&name).ok_or(SemanticError::UnknownFunction { name })?;
            return builtin.call(&args, &mut self.output);
        }

        if let Some(value) = self.variables.get(&name) {
            return Ok(value.clone().into());
        }
        if let Some(builtin) = lookup(&name) {
            return Ok(Operand::Function(builtin));
        }
        Err(SemanticError::UnknownIdentifier { name }.into())
    }

    /// Parses a call's argument list up to and including the `)`.
    ///
    /// The opening `(` has already been consumed.
    fn parse_arguments(&mut self) -> EvalResult<Vec<Operand>> {
        let mut args = Vec::new();
        self.cursor.skip_whitespace();

        if self.cursor.peek() != Some(')') {
            args.push(self.parse_expression()?);
            self.cursor.skip_whitespace();
            while self.cursor.eat(',') {
                args.push(self.parse_expression()?);
                self.cursor.skip_whitespace();
            }
        }

        self.expect_closing_paren()?;
        Ok(args)
    }

    fn expect_closing_paren(&mut self) -> EvalResult<()> {
        if self.cursor.eat(')') {
            return Ok(());
        }
        Err(SyntaxError::ExpectedClosingParen { position: self.cursor.position() }.into())
    }
}
