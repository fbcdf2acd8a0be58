/// The builtin table, arity checking and dispatch.
pub mod core;

/// Pure numeric builtins.
///
/// Trigonometric, exponential, rounding and root functions that map numbers
/// to numbers, plus `rand`.
pub mod builtin;
/// The `fact` (factorial) function implementation.
pub mod fact;
/// The `help` function implementation.
///
/// Lists every builtin with its description, or describes a single one.
pub mod help;
/// `min` and `max` function implementations.
///
/// Returns the smallest or largest of any number of arguments.
pub mod min_max;
/// The `print`, `clear` and `version` function implementations.
///
/// These write to, or erase, the host console and produce no value.
pub mod print;
/// The `round` and `roundToDecimalPlace` function implementations.
pub mod round;
