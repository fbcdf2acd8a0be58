/// Number formatting and string-to-number coercion.
///
/// Numbers print the way the console has always shown them: integral values
/// without a fractional part, `NaN`, `Infinity` and `-Infinity` spelled out,
/// and very large or very small magnitudes in exponent form.
pub mod number;

pub mod core;
