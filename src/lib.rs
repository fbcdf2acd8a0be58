//! # classhub
//!
//! The ClassHub expression console: a small calculator language evaluated one
//! line at a time. Lines may assign variables, call a fixed library of
//! builtin functions, and mix numbers and strings with the usual operator
//! precedence.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalResult,
    host::Host,
    interpreter::{session::Session, value::core::Value},
};

/// The interactive console built on top of the evaluator.
///
/// Echoes submitted lines, shows results as `= value` and failures as
/// `Error: message`, and can time evaluations.
pub mod console;
/// Provides the error types for evaluation.
///
/// Every failure is either a syntax error, which carries the character
/// offset where scanning stopped, or a semantic error for input that is well
/// formed but names something that cannot be evaluated.
///
/// # Responsibilities
/// - Defines `SyntaxError`, `SemanticError` and the wrapping `EvalError`.
/// - Formats the messages shown after `Error: ` in the console.
pub mod error;
/// The output interface the evaluator needs from its host.
///
/// Defines the `Host` trait together with an in-memory host and a host that
/// writes to standard output.
pub mod host;
/// Orchestrates the evaluation of a line.
///
/// This module ties together the character cursor, the grammar, the value
/// types, the builtin table, and the session that keeps variables between
/// lines.
///
/// # Responsibilities
/// - Scans and evaluates one line per call.
/// - Resolves variables and builtin functions.
/// - Reports syntax and semantic errors.
pub mod interpreter;
/// General utilities shared by the interpreter.
pub mod util;

/// Evaluates a sequence of lines in one fresh session.
///
/// Stops at the first failing line. Blank lines are skipped. Returns the
/// result of the last line that produced a value.
///
/// # Errors
/// Returns the first evaluation error encountered.
///
/// # Examples
/// ```
/// use classhub::{get_result, host::BufferHost, interpreter::value::core::Value};
///
/// let mut host = BufferHost::default();
/// let result = get_result("r = 2\npi = 3.14159\npi * r * r", &mut host).unwrap();
/// assert_eq!(result, Some(Value::Number(3.14159 * 2.0 * 2.0)));
///
/// // Unknown identifier.
/// assert!(get_result("y + 1", &mut host).is_err());
/// ```
pub fn get_result(source: &str, host: &mut dyn Host) -> EvalResult<Option<Value>> {
    let mut session = Session::new();
    let mut result = None;

    for line in source.lines().filter(|l| !l.trim().is_empty()) {
        if let Some(value) = session.evaluate(line, host)? {
            result = Some(value);
        }
    }

    Ok(result)
}
