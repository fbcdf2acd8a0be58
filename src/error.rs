/// Syntax errors.
///
/// Defines every error raised while scanning the input line: unterminated
/// string literals, missing parentheses, absent numbers or identifiers, and
/// characters left over after a complete statement. Each variant carries the
/// character offset where scanning stopped.
pub mod syntax_error;
/// Semantic errors.
///
/// Contains the errors raised for input that scans correctly but cannot be
/// evaluated: unknown functions, unknown identifiers, wrong argument counts,
/// and function references used where a value is required.
pub mod semantic_error;

pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

/// Any failure of a single evaluation.
///
/// Both kinds end the current evaluation immediately. Neither affects the
/// variable namespace of the session that produced it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The line is malformed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The line is well formed but refers to something that cannot be
    /// evaluated.
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl EvalError {
    /// Returns `true` if this is a syntax error.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Returns `true` if this is a semantic error.
    #[must_use]
    pub const fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic(_))
    }
}

/// Result type used throughout evaluation.
pub type EvalResult<T> = Result<T, EvalError>;
