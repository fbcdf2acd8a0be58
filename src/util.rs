/// Stack growth for deeply nested input.
///
/// The grammar recurses once per parenthesis and once per unary sign, so a
/// line such as `((((...1...))))` nests as deeply as it is long. The helper
/// in this module grows the stack on demand instead of overflowing.
pub mod stack;
