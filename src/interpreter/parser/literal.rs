use crate::{
    error::{EvalResult, SyntaxError},
    interpreter::parser::core::Parser,
};

/// Returns `true` for characters allowed in identifiers: ASCII letters and
/// `_`. Digits are deliberately excluded, so `x1` is `x` followed by `1`.
#[must_use]
pub const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl Parser<'_> {
    /// Scans a `"`-delimited string literal.
    ///
    /// The cursor must be on the opening quote. There are no escape
    /// sequences; the literal ends at the next `"`.
    ///
    /// # Errors
    /// `UnterminatedString` if the line ends before the closing quote.
    pub(crate) fn parse_string(&mut self) -> EvalResult<String> {
        let start = self.cursor.position();
        self.cursor.bump();

        let text = self.cursor.take_while(|c| c != '"');
        if !self.cursor.eat('"') {
            return Err(SyntaxError::UnterminatedString { position: start }.into());
        }
        Ok(text)
    }

    /// Scans an unsigned number of the form `digits` or `digits.digits`.
    ///
    /// A `.` that is not followed by a digit is left in place, as is any
    /// exponent suffix; both end up as unexpected characters.
    ///
    /// # Errors
    /// `ExpectedNumber` if no digit is under the cursor.
    pub(crate) fn parse_number(&mut self) -> EvalResult<f64> {
        self.cursor.skip_whitespace();
        let position = self.cursor.position();

        let mut text = self.cursor.take_while(|c| c.is_ascii_digit());
        if text.is_empty() {
            return Err(SyntaxError::ExpectedNumber { position }.into());
        }

        if self.cursor.peek() == Some('.')
           && self.cursor.peek_nth(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.bump();
            text.push('.');
            text.push_str(&self.cursor.take_while(|c| c.is_ascii_digit()));
        }

        text.parse()
            .map_err(|_| SyntaxError::ExpectedNumber { position }.into())
    }

    /// Scans an identifier made of ASCII letters and underscores.
    ///
    /// # Errors
    /// `ExpectedIdentifier` if no identifier character is under the cursor.
    pub(crate) fn parse_identifier(&mut self) -> EvalResult<String> {
        self.cursor.skip_whitespace();
        let position = self.cursor.position();

        let name = self.cursor.take_while(is_identifier_char);
        if name.is_empty() {
            return Err(SyntaxError::ExpectedIdentifier { position }.into());
        }
        Ok(name)
    }
}
