use crate::interpreter::function::core::Arity;

/// Represents all errors raised for well-formed input that cannot be
/// evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SemanticError {
    /// Called a name that is not in the function table.
    #[error("Unknown function: {name}")]
    UnknownFunction {
        /// The name used at the call site.
        name: String,
    },
    /// Referenced a name that is neither a variable nor a function.
    #[error("Unknown identifier: {name}")]
    UnknownIdentifier {
        /// The name that failed to resolve.
        name: String,
    },
    /// A builtin received the wrong number of arguments.
    #[error("{name}() expects {expected} argument(s), got {found}")]
    ArgumentCountMismatch {
        /// The builtin that was called.
        name:     String,
        /// What the builtin accepts.
        expected: Arity,
        /// How many arguments were supplied.
        found:    usize,
    },
    /// A function reference was used where a number or string is required.
    #[error("{name} is a function; call it as {name}(...)")]
    FunctionAsValue {
        /// The referenced function.
        name: String,
    },
    /// The empty result of a side-effecting call was used as a value.
    #[error("{name}() does not produce a value")]
    NoValue {
        /// The function that was called.
        name: String,
    },
}
