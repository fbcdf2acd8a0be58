use crate::{
    error::EvalResult,
    host::Host,
    interpreter::value::core::{Operand, Value},
};

/// Version reported by `version()`.
pub const VERSION: &str = "1.1";

/// Prints all arguments joined by single spaces.
///
/// # Example
/// ```
/// use classhub::{
///     host::BufferHost,
///     interpreter::{function::print::print, value::core::{Operand, Value}},
/// };
///
/// let mut host = BufferHost::default();
/// let args = [Operand::from(Value::from("x is")), Operand::from(Value::Number(2.0))];
/// let result = print(&args, &mut host).unwrap();
///
/// assert_eq!(result, None);
/// assert_eq!(host.lines(), ["x is 2"]);
/// ```
pub fn print(args: &[Operand], host: &mut dyn Host) -> EvalResult<Option<Value>> {
    let parts = args.iter()
                    .map(|arg| arg.as_value().map(ToString::to_string))
                    .collect::<EvalResult<Vec<_>>>()?;

    host.print(&parts.join(" "));
    Ok(None)
}

/// Asks the host to erase its output.
pub fn clear(_args: &[Operand], host: &mut dyn Host) -> EvalResult<Option<Value>> {
    host.clear();
    Ok(None)
}

/// Prints the console version.
pub fn version(_args: &[Operand], host: &mut dyn Host) -> EvalResult<Option<Value>> {
    host.print(&format!("ClassHub v{VERSION}"));
    Ok(None)
}
