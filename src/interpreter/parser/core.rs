use std::collections::HashMap;

use crate::{
    error::{EvalResult, SyntaxError},
    host::PendingOutput,
    interpreter::{
        cursor::{Checkpoint, Cursor},
        value::core::{Operand, Value},
    },
};

/// The outcome of parsing one complete line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expression`; the value still has to be stored.
    Assignment {
        /// The variable being assigned.
        name:  String,
        /// The evaluated right-hand side.
        value: Value,
    },
    /// A bare expression and whatever it evaluated to.
    Expression(Operand),
}

/// A point the parser can rewind to.
///
/// Covers both the input position and the side effects recorded so far, so
/// that a discarded attempt leaves no trace.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParserCheckpoint {
    cursor: Checkpoint,
    output: usize,
}

/// Evaluates one input line while reading it.
///
/// The parser only reads the variable namespace. An assignment is returned
/// as [`Statement::Assignment`] and stored by the session once the whole line
/// has been accepted, and output from `print` and friends is held back until
/// then as well.
pub struct Parser<'a> {
    pub(crate) cursor:    Cursor,
    pub(crate) variables: &'a HashMap<String, Value>,
    pub(crate) output:    PendingOutput,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `source` that resolves names in `variables`.
    #[must_use]
    pub fn new(source: &str, variables: &'a HashMap<String, Value>) -> Self {
        Self { cursor: Cursor::new(source),
               variables,
               output: PendingOutput::default() }
    }

    /// Parses the whole line as a single statement.
    ///
    /// Fails if anything other than whitespace follows the statement.
    ///
    /// # Errors
    /// Any syntax or semantic error raised by the grammar, or
    /// `UnexpectedCharacter` for trailing input.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use classhub::interpreter::{
    ///     parser::core::{Parser, Statement},
    ///     value::core::{Operand, Value},
    /// };
    ///
    /// let variables = HashMap::new();
    /// let mut parser = Parser::new("2 + 3 * 4", &variables);
    ///
    /// assert_eq!(parser.parse_line().unwrap(),
    ///            Statement::Expression(Operand::Value(Value::Number(14.0))));
    /// ```
    pub fn parse_line(&mut self) -> EvalResult<Statement> {
        let statement = self.parse_statement()?;
        self.expect_end()?;
        Ok(statement)
    }

    /// Consumes trailing whitespace and fails on anything else.
    pub(crate) fn expect_end(&mut self) -> EvalResult<()> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            None => Ok(()),
            Some(found) => Err(SyntaxError::UnexpectedCharacter { found,
                                                                  position: self.cursor
                                                                                .position() }.into()),
        }
    }

    /// Hands over the side effects recorded while parsing.
    pub(crate) fn into_output(self) -> PendingOutput {
        self.output
    }

    pub(crate) fn checkpoint(&self) -> ParserCheckpoint {
        ParserCheckpoint { cursor: self.cursor.checkpoint(),
                           output: self.output.len() }
    }

    pub(crate) fn restore(&mut self, checkpoint: ParserCheckpoint) {
        self.cursor.restore(checkpoint.cursor);
        self.output.truncate(checkpoint.output);
    }
}
