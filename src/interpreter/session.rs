use std::collections::HashMap;

use crate::{
    error::EvalResult,
    host::Host,
    interpreter::{
        parser::core::{Parser, Statement},
        value::core::{Operand, Value},
    },
};

/// Stores the state shared by every evaluation in one console session.
///
/// The variable namespace lives here and persists from one call of
/// [`Session::evaluate`] to the next. It only changes when an assignment
/// line evaluates successfully. The builtin table is static and shared by
/// all sessions.
///
/// # Example
/// ```
/// use classhub::{
///     host::BufferHost,
///     interpreter::{session::Session, value::core::Value},
/// };
///
/// let mut session = Session::new();
/// let mut host = BufferHost::default();
///
/// assert_eq!(session.evaluate("x = 5", &mut host).unwrap(), Some(Value::Number(5.0)));
/// assert_eq!(session.evaluate("x + 1", &mut host).unwrap(), Some(Value::Number(6.0)));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Session {
    variables: HashMap<String, Value>,
}

impl Session {
    /// Creates a session with an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one line.
    ///
    /// Returns the value to display, or `None` for a line whose result is
    /// the empty result of a side-effecting call such as `print(...)`.
    ///
    /// Output requested by the line reaches `host` only if the whole line
    /// evaluates; a failing line prints nothing and leaves the namespace as
    /// it was.
    ///
    /// # Errors
    /// - `SyntaxError` for malformed input, with the character offset.
    /// - `SemanticError` for unknown names, wrong argument counts, or a
    ///   function reference used as the result.
    pub fn evaluate(&mut self, line: &str, host: &mut dyn Host) -> EvalResult<Option<Value>> {
        let mut parser = Parser::new(line, &self.variables);
        let statement = parser.parse_line().inspect_err(|e| {
                                                tracing::debug!(line, error = %e, "evaluation failed");
                                            })?;

        let result = match statement {
            Statement::Assignment { name, value } => {
                parser.into_output().replay(host);
                tracing::debug!(line, name = %name, value = %value, "assigned");
                self.variables.insert(name, value.clone());
                Some(value)
            },
            Statement::Expression(operand) => {
                let value = match operand {
                    Operand::Nothing(_) => None,
                    other => Some(other.into_value()?),
                };
                parser.into_output().replay(host);
                tracing::debug!(line, value = ?value, "evaluated");
                value
            },
        };

        Ok(result)
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}
