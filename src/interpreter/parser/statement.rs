use crate::{
    error::EvalResult,
    interpreter::parser::core::{Parser, Statement},
};

impl Parser<'_> {
    /// Parses a statement.
    ///
    /// Grammar:
    /// ```text
    /// statement := identifier '=' expression
    ///            | expression
    /// ```
    ///
    /// The assignment form is tried first. If that attempt fails for any
    /// reason, including an error deep inside the right-hand side, the
    /// parser rewinds to where the statement started and reads the whole
    /// line again as an expression. The error from the attempt is dropped.
    ///
    /// # Errors
    /// Only errors from the expression fallback are reported.
    pub fn parse_statement(&mut self) -> EvalResult<Statement> {
        self.cursor.skip_whitespace();
        let start = self.checkpoint();

        match self.try_parse_assignment() {
            Ok(Some(statement)) => return Ok(statement),
            Ok(None) => {},
            Err(e) => tracing::trace!(error = %e, "assignment attempt failed, reparsing as expression"),
        }

        self.restore(start);
        Ok(Statement::Expression(self.parse_expression()?))
    }

    /// Attempts `identifier '=' expression`.
    ///
    /// Returns `Ok(None)` when the identifier is not followed by `=`. The
    /// cursor is left wherever the attempt stopped; the caller restores it.
    fn try_parse_assignment(&mut self) -> EvalResult<Option<Statement>> {
        let name = self.parse_identifier()?;
        self.cursor.skip_whitespace();

        if !self.cursor.eat('=') {
            return Ok(None);
        }

        let value = self.parse_expression()?.into_value()?;
        Ok(Some(Statement::Assignment { name, value }))
    }
}
