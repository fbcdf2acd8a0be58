use crate::{
    error::EvalResult,
    host::Host,
    interpreter::{
        function::core::number_arg,
        value::{
            core::{Operand, Value},
            number::round_half_up,
        },
    },
};

/// Rounds to the nearest integer; halves round towards positive infinity.
///
/// # Example
/// ```
/// use classhub::{
///     host::BufferHost,
///     interpreter::{function::round::round, value::core::{Operand, Value}},
/// };
///
/// let r = round(&[Operand::from(Value::Number(-2.5))], &mut BufferHost::default()).unwrap();
/// assert_eq!(r, Some(Value::Number(-2.0)));
/// ```
pub fn round(args: &[Operand], _host: &mut dyn Host) -> EvalResult<Option<Value>> {
    Ok(Some(Value::Number(round_half_up(number_arg(args, 0)?))))
}

/// Rounds `x` to `d` decimal places by scaling, rounding and unscaling.
///
/// The scale is `10^d`, so a negative `d` rounds to tens, hundreds and so
/// on, and the usual binary floating-point artifacts apply.
///
/// # Example
/// ```
/// use classhub::{
///     host::BufferHost,
///     interpreter::{function::round::round_to_decimal_place, value::core::{Operand, Value}},
/// };
///
/// let args = [Operand::from(Value::Number(3.14159)), Operand::from(Value::Number(2.0))];
/// let r = round_to_decimal_place(&args, &mut BufferHost::default()).unwrap();
/// assert_eq!(r, Some(Value::Number(3.14)));
/// ```
pub fn round_to_decimal_place(args: &[Operand], _host: &mut dyn Host) -> EvalResult<Option<Value>> {
    let x = number_arg(args, 0)?;
    let scale = 10f64.powf(number_arg(args, 1)?);

    Ok(Some(Value::Number(round_half_up(x * scale) / scale)))
}
