use crate::{
    error::EvalResult,
    host::Host,
    interpreter::{
        function::core::number_arg,
        value::core::{Operand, Value},
    },
};

/// Computes the factorial of a number.
///
/// - Negative input (and `NaN`) gives `NaN`.
/// - `0! = 1`.
/// - Otherwise the product `1 * 2 * ... * k` for every integer `k <= n` is
///   computed iteratively, so `fact(4.5)` is `24`.
///
/// The loop stops as soon as the product overflows to infinity, which bounds
/// it at a couple of hundred iterations for any input.
///
/// # Example
/// ```
/// use classhub::{
///     host::BufferHost,
///     interpreter::{function::fact::fact, value::core::{Operand, Value}},
/// };
///
/// let r = fact(&[Operand::from(Value::Number(5.0))], &mut BufferHost::default()).unwrap();
/// assert_eq!(r, Some(Value::Number(120.0)));
/// ```
pub fn fact(args: &[Operand], _host: &mut dyn Host) -> EvalResult<Option<Value>> {
    Ok(Some(Value::Number(factorial(number_arg(args, 0)?))))
}

fn factorial(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }

    let mut result = 1.0_f64;
    let mut i = 1.0_f64;
    while i <= n && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    result
}
