/// The cursor module scans the raw input line.
///
/// There is no separate tokenizer: the parser reads characters directly
/// through a cursor that only moves forward, except when a speculative parse
/// restores a saved checkpoint.
///
/// # Responsibilities
/// - Tracks the current character offset into one input line.
/// - Skips whitespace and consumes runs of characters by predicate.
/// - Saves and restores checkpoints for backtracking.
pub mod cursor;
/// The function module holds the builtin function table.
///
/// Every callable name is described by a static descriptor carrying its
/// name, accepted arity, one-line description, and implementation. The table
/// is immutable and shared by every evaluation.
///
/// # Responsibilities
/// - Declares the builtin table and looks functions up by name.
/// - Checks argument counts before dispatch.
/// - Implements the numeric library and the host-facing functions.
pub mod function;
/// The parser module evaluates a line while it reads it.
///
/// The grammar is recursive descent over `statement`, `expression`, `term`
/// and `factor`. Each rule computes its value directly instead of building a
/// syntax tree.
///
/// # Responsibilities
/// - Implements the grammar rules and operator precedence.
/// - Reports syntax errors with the offending character offset.
/// - Resolves identifiers against the namespace and the function table.
pub mod parser;
/// The session module owns the state shared between evaluations.
///
/// A session holds the variable namespace and is the public entry point for
/// evaluating one line at a time.
pub mod session;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum (numbers and strings) and the `Operand` enum
///   that also covers function references.
/// - Implements coercions between strings and numbers.
/// - Formats values for display.
pub mod value;
