use crate::{
    error::EvalResult,
    host::Host,
    interpreter::{
        function::core::number_arg,
        value::core::{Operand, Value},
    },
};

/// Generates a builtin that applies an `f64` method to its only argument.
///
/// The argument is coerced to a number first, so `sqrt("16")` is `4`.
///
/// # Example
/// ```
/// use classhub::{
///     host::BufferHost,
///     interpreter::{function::builtin::sin, value::core::{Operand, Value}},
/// };
///
/// let x = Operand::Value(Value::Number(std::f64::consts::PI / 2.0));
/// let r = sin(&[x], &mut BufferHost::default()).unwrap();
///
/// assert_eq!(r, Some(Value::Number(1.0)));
/// ```
macro_rules! unary_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Operand], _host: &mut dyn Host) -> EvalResult<Option<Value>> {
            Ok(Some(Value::Number(number_arg(args, 0)?.$real_fn())))
        }
    };
}

unary_builtin!(sqrt, sqrt);
unary_builtin!(sin, sin);
unary_builtin!(cos, cos);
unary_builtin!(tan, tan);
unary_builtin!(asin, asin);
unary_builtin!(acos, acos);
unary_builtin!(atan, atan);
unary_builtin!(abs, abs);
unary_builtin!(floor, floor);
unary_builtin!(ceil, ceil);
unary_builtin!(exp, exp);
unary_builtin!(ln, ln);
unary_builtin!(log10, log10);
unary_builtin!(cbrt, cbrt);

/// Raises the first argument to the power of the second.
///
/// # Example
/// ```
/// use classhub::{
///     host::BufferHost,
///     interpreter::{function::builtin::pow, value::core::{Operand, Value}},
/// };
///
/// let args = [Operand::from(Value::Number(2.0)), Operand::from(Value::Number(10.0))];
/// let r = pow(&args, &mut BufferHost::default()).unwrap();
/// assert_eq!(r, Some(Value::Number(1024.0)));
/// ```
pub fn pow(args: &[Operand], _host: &mut dyn Host) -> EvalResult<Option<Value>> {
    let base = number_arg(args, 0)?;
    let exponent = number_arg(args, 1)?;

    Ok(Some(Value::Number(base.powf(exponent))))
}

/// Returns a pseudo-random number in `[0, 1)`.
pub fn rand(_args: &[Operand], _host: &mut dyn Host) -> EvalResult<Option<Value>> {
    Ok(Some(Value::Number(::rand::random::<f64>())))
}
