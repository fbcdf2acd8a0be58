/// Parser state, checkpoints and the entry points used by a session.
pub mod core;

/// Expression and term rules.
///
/// Implements the two binary precedence levels: additive operators in
/// `expression` and multiplicative operators in `term`, both left
/// associative.
pub mod expression;

/// Factor rule.
///
/// Handles string literals, unary signs, parenthesized groups, numbers, and
/// identifiers (variables, function references and function calls).
pub mod factor;

/// Scanners for numbers, strings and identifiers.
pub mod literal;

/// Binary operators and how they combine values.
pub mod operator;

/// Statement rule.
///
/// Tries an assignment first and falls back to a plain expression.
pub mod statement;
