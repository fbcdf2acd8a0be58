use crate::{
    error::EvalResult,
    host::Host,
    interpreter::{
        function::core::{builtins, lookup},
        value::core::{Operand, Value},
    },
};

/// Heading printed above the full function listing.
const LISTING_HEADER: &str = "Available functions:";

/// Prints help text through the host.
///
/// - With no argument, prints every builtin sorted by name, one
///   `name: description` line each, as a single message.
/// - With a string argument, describes the builtin of that name.
/// - With a function reference, describes the referenced builtin.
///
/// Unknown names print `No help available for: <name>`.
///
/// # Example
/// ```
/// use classhub::{
///     host::BufferHost,
///     interpreter::{function::help::help, value::core::{Operand, Value}},
/// };
///
/// let mut host = BufferHost::default();
/// help(&[Operand::from(Value::from("pow"))], &mut host).unwrap();
/// help(&[Operand::from(Value::from("nope"))], &mut host).unwrap();
///
/// assert_eq!(host.lines(),
///            ["pow(x, y): Returns x raised to the power of y.",
///             "No help available for: nope"]);
/// ```
pub fn help(args: &[Operand], host: &mut dyn Host) -> EvalResult<Option<Value>> {
    let Some(arg) = args.first() else {
        host.print(&listing());
        return Ok(None);
    };

    let key = match arg {
        Operand::Function(builtin) => builtin.name.to_string(),
        other => other.as_value()?.to_string(),
    };

    match lookup(&key) {
        Some(builtin) => host.print(builtin.description),
        None => host.print(&format!("No help available for: {key}")),
    }
    Ok(None)
}

/// Builds the sorted listing printed by `help()`.
fn listing() -> String {
    let mut entries = builtins().iter().collect::<Vec<_>>();
    entries.sort_unstable_by_key(|b| b.name);

    let mut text = LISTING_HEADER.to_string();
    for builtin in entries {
        text.push('\n');
        text.push_str(builtin.name);
        text.push_str(": ");
        text.push_str(builtin.description);
    }
    text
}
