use crate::{
    error::EvalResult,
    host::Host,
    interpreter::{
        function::core::number_arg,
        value::core::{Operand, Value},
    },
};

/// Returns the largest argument, or `-Infinity` when called with none.
///
/// # Example
/// ```
/// use classhub::{
///     host::BufferHost,
///     interpreter::{function::min_max::max, value::core::{Operand, Value}},
/// };
///
/// let args = [Operand::from(Value::Number(3.0)), Operand::from(Value::Number(7.0)), Operand::from(Value::Number(-1.0))];
/// let r = max(&args, &mut BufferHost::default()).unwrap();
/// assert_eq!(r, Some(Value::Number(7.0)));
/// ```
pub fn max(args: &[Operand], _host: &mut dyn Host) -> EvalResult<Option<Value>> {
    extreme(args, f64::NEG_INFINITY, f64::max)
}

/// Returns the smallest argument, or `Infinity` when called with none.
pub fn min(args: &[Operand], _host: &mut dyn Host) -> EvalResult<Option<Value>> {
    extreme(args, f64::INFINITY, f64::min)
}

/// Folds the arguments with `pick`, letting any `NaN` win.
///
/// `f64::max` and `f64::min` ignore `NaN`, so it is checked separately.
fn extreme(args: &[Operand], start: f64, pick: fn(f64, f64) -> f64) -> EvalResult<Option<Value>> {
    let mut result = start;
    for index in 0..args.len() {
        let n = number_arg(args, index)?;
        if n.is_nan() {
            return Ok(Some(Value::Number(f64::NAN)));
        }
        result = pick(result, n);
    }
    Ok(Some(Value::Number(result)))
}
