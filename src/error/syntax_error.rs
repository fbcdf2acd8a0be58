/// Represents all errors that can occur while scanning an input line.
///
/// Positions are character offsets from the start of the line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// A string literal was opened with `"` but never closed.
    #[error("Unterminated string literal starting at position {position}")]
    UnterminatedString {
        /// Offset of the opening quote.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Expected ')' at position {position}")]
    ExpectedClosingParen {
        /// Offset where the parenthesis was expected.
        position: usize,
    },
    /// A number literal was expected but not found.
    #[error("Expected number at position {position}")]
    ExpectedNumber {
        /// Offset where the number was expected.
        position: usize,
    },
    /// An identifier was expected but not found.
    #[error("Expected identifier at position {position}")]
    ExpectedIdentifier {
        /// Offset where the identifier was expected.
        position: usize,
    },
    /// Input remained after a complete statement was parsed.
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter {
        /// The first leftover character.
        found:    char,
        /// Offset of that character.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns the character offset the error refers to.
    ///
    /// # Example
    /// ```
    /// use classhub::error::SyntaxError;
    ///
    /// let err = SyntaxError::ExpectedClosingParen { position: 6 };
    /// assert_eq!(err.position(), 6);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnterminatedString { position }
            | Self::ExpectedClosingParen { position }
            | Self::ExpectedNumber { position }
            | Self::ExpectedIdentifier { position }
            | Self::UnexpectedCharacter { position, .. } => *position,
        }
    }
}
