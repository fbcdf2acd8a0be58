use std::io::{self, Write};

/// The output side of the console that hosts the evaluator.
///
/// The evaluator never writes anywhere on its own. The functions with side
/// effects (`print`, `help`, `version` and `clear`) go through this trait.
pub trait Host {
    /// Shows one message to the user.
    fn print(&mut self, text: &str);

    /// Erases everything shown so far.
    fn clear(&mut self);
}

/// A host that keeps its output in memory.
///
/// Every `print` call becomes one entry and `clear` drops all entries.
///
/// # Example
/// ```
/// use classhub::host::{BufferHost, Host};
///
/// let mut host = BufferHost::default();
/// host.print("one");
/// host.clear();
/// host.print("two");
/// assert_eq!(host.lines(), ["two"]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferHost {
    lines: Vec<String>,
}

impl BufferHost {
    /// Returns the messages printed since the last clear.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Removes and returns every buffered message.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Host for BufferHost {
    fn print(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

/// ANSI sequence that clears the terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A host that writes to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutHost;

impl Host for StdoutHost {
    fn print(&mut self, text: &str) {
        println!("{text}");
    }

    fn clear(&mut self) {
        print!("{CLEAR_SCREEN}");
        if let Err(e) = io::stdout().flush() {
            tracing::warn!("failed to flush stdout after clearing: {e}");
        }
    }
}

/// One side effect requested during evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostEvent {
    Print(String),
    Clear,
}

/// Holds side effects back until an evaluation has succeeded.
///
/// The parser hands this to builtins instead of the real host. A failed
/// speculative parse truncates the events recorded after its checkpoint, and
/// a failed evaluation discards them all, so the real host only sees the
/// output of a line that evaluated completely.
#[derive(Debug, Default)]
pub(crate) struct PendingOutput {
    events: Vec<HostEvent>,
}

impl PendingOutput {
    /// Number of events recorded so far; used as a checkpoint.
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    /// Drops every event recorded after `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.events.truncate(len);
    }

    /// Forwards the recorded events to `host` in order.
    pub(crate) fn replay(self, host: &mut dyn Host) {
        for event in self.events {
            match event {
                HostEvent::Print(text) => host.print(&text),
                HostEvent::Clear => host.clear(),
            }
        }
    }
}

impl Host for PendingOutput {
    fn print(&mut self, text: &str) {
        self.events.push(HostEvent::Print(text.to_string()));
    }

    fn clear(&mut self) {
        self.events.push(HostEvent::Clear);
    }
}
