use std::time::Instant;

use crate::{
    error::EvalError,
    host::Host,
    interpreter::{session::Session, value::core::Value},
};

/// Hint printed when a console starts.
pub const GREETING: &str =
    "Use 'help()' to see available functions. Use 'help(function)' for specific help.";

/// Console options that can change while the console runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Print how long each evaluation took.
    pub show_execution_time: bool,
}

/// What happened to one submitted line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was blank and was not evaluated.
    Ignored,
    /// The line produced a value, shown as `= value`.
    Value(Value),
    /// The line only had side effects.
    Nothing,
    /// The line failed, shown as `Error: message`.
    Error(EvalError),
    /// The line was a console command such as `:time on`.
    Command,
}

/// The interactive command console.
///
/// Echoes every submitted line, evaluates it in a long-lived [`Session`],
/// and shows the result or error through the host. Errors never end the
/// session. Lines starting with `:` are console commands rather than
/// expressions; `:time on` and `:time off` switch execution timing.
///
/// # Example
/// ```
/// use classhub::{console::Console, host::BufferHost};
///
/// let mut console = Console::new(BufferHost::default(), Default::default());
/// console.submit("x = 2");
/// console.submit("x * 21");
/// console.submit("y");
///
/// assert_eq!(console.host().lines(),
///            ["> x = 2", "= 2", "> x * 21", "= 42", "> y", "Error: Unknown identifier: y"]);
/// ```
#[derive(Debug)]
pub struct Console<H: Host> {
    session: Session,
    host:    H,
    config:  ConsoleConfig,
}

impl<H: Host> Console<H> {
    /// Creates a console writing to `host`.
    pub fn new(host: H, config: ConsoleConfig) -> Self {
        Self { session: Session::new(),
               host,
               config }
    }

    /// Prints the start-up hint.
    pub fn greet(&mut self) {
        self.host.print(GREETING);
    }

    /// Submits one command line.
    ///
    /// Whitespace-only lines are ignored. A recognised console command is
    /// applied without being echoed. Anything else is echoed as `> line`
    /// and evaluated.
    pub fn submit(&mut self, line: &str) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Ignored;
        }
        if let Some(enabled) = timing_command(line) {
            self.set_show_execution_time(enabled);
            return Outcome::Command;
        }

        self.host.print(&format!("> {line}"));

        let start = Instant::now();
        let outcome = match self.session.evaluate(line, &mut self.host) {
            Ok(Some(value)) => {
                self.host.print(&format!("= {value}"));
                Outcome::Value(value)
            },
            Ok(None) => Outcome::Nothing,
            Err(e) => {
                self.host.print(&format!("Error: {e}"));
                Outcome::Error(e)
            },
        };

        if self.config.show_execution_time {
            let elapsed = start.elapsed().as_secs_f64() * 1000.0;
            self.host.print(&format!("(Evaluated in {elapsed:.2}ms)"));
        }

        outcome
    }

    /// Turns execution timing on or off and announces the change.
    pub fn set_show_execution_time(&mut self, enabled: bool) {
        self.config.show_execution_time = enabled;
        let state = if enabled { "enabled" } else { "disabled" };
        self.host.print(&format!("Flag 'flag.showExecutionTime' {state}"));
    }

    /// The current options.
    #[must_use]
    pub const fn config(&self) -> ConsoleConfig {
        self.config
    }

    /// The session holding the variable namespace.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The host the console writes to.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }
}

/// Recognises `:time on` and `:time off`.
fn timing_command(line: &str) -> Option<bool> {
    let mut words = line.split_whitespace();
    if words.next() != Some(":time") {
        return None;
    }
    let enabled = match words.next()? {
        "on" => true,
        "off" => false,
        _ => return None,
    };
    words.next().is_none().then_some(enabled)
}
