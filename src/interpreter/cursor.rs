/// A saved cursor position.
///
/// Obtained from [`Cursor::checkpoint`] and handed back to
/// [`Cursor::restore`] to rewind a failed speculative parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Reads one input line character by character.
///
/// Offsets are counted in characters, not bytes, so that positions reported
/// in errors line up with what the user typed.
///
/// # Example
/// ```
/// use classhub::interpreter::cursor::Cursor;
///
/// let mut cursor = Cursor::new("  ab1");
/// cursor.skip_whitespace();
/// assert_eq!(cursor.take_while(|c| c.is_ascii_alphabetic()), "ab");
/// assert_eq!(cursor.position(), 4);
/// assert_eq!(cursor.peek(), Some('1'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor {
    chars:    Vec<char>,
    position: usize,
}

impl Cursor {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { chars:    source.chars().collect(),
               position: 0, }
    }

    /// Returns the current character offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the character under the cursor without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns the character `offset` places after the cursor.
    #[must_use]
    pub fn peek_nth(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// Consumes and returns the character under the cursor.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    /// Consumes `expected` if it is the next character.
    ///
    /// Returns whether anything was consumed.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            return true;
        }
        false
    }

    /// Advances past any whitespace.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.peek().is_some_and(&pred) {
            self.position += 1;
        }
        self.chars[start..self.position].iter().collect()
    }

    /// Saves the current position.
    #[must_use]
    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    /// Rewinds to a previously saved position.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.0;
    }
}
