use std::borrow::Cow;
use thiserror::Error;

/// Diagnostic produced when a parse attempt fails.
///
/// Errors are plain data threaded through `Result`; no combinator unwinds
/// across another combinator's frame. Positions are measured in the unit of
/// the cursor that produced the error: characters for [`TextCursor`], bits
/// for [`BitCursor`].
///
/// [`TextCursor`]: crate::cursors::TextCursor
/// [`BitCursor`]: crate::cursors::BitCursor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A primitive needed at least one more unit of input.
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput { position: usize },

    /// The expected literal text (or bit value) was not present.
    #[error("tried to match '{expected}' at position {position}, but got '{found}'")]
    LiteralMismatch {
        expected: Cow<'static, str>,
        found: String,
        position: usize,
    },

    /// The current element is not in the expected character class.
    #[error("expected {expected} at position {position}")]
    PatternMismatch {
        expected: &'static str,
        position: usize,
    },

    /// Every alternative of a `choice` failed from the same starting cursor.
    #[error("no alternative matched at position {position}")]
    ChoiceExhausted { position: usize },

    /// `many1`/`sep_by1` captured zero elements.
    #[error("expected at least one match at position {position}")]
    EmptyRepetition { position: usize },
}

impl ParseError {
    /// Returns the position where this error occurred.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEndOfInput { position }
            | ParseError::LiteralMismatch { position, .. }
            | ParseError::PatternMismatch { position, .. }
            | ParseError::ChoiceExhausted { position }
            | ParseError::EmptyRepetition { position } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_accessor() {
        let errors = [
            ParseError::UnexpectedEndOfInput { position: 3 },
            ParseError::LiteralMismatch {
                expected: "abc".into(),
                found: "abx".to_string(),
                position: 3,
            },
            ParseError::PatternMismatch {
                expected: "letters",
                position: 3,
            },
            ParseError::ChoiceExhausted { position: 3 },
            ParseError::EmptyRepetition { position: 3 },
        ];

        for error in errors {
            assert_eq!(error.position(), 3);
        }
    }

    #[test]
    fn test_literal_mismatch_display() {
        let error = ParseError::LiteralMismatch {
            expected: "hello".into(),
            found: "help me".to_string(),
            position: 0,
        };

        let message = error.to_string();
        assert!(message.contains("'hello'"));
        assert!(message.contains("'help me'"));
        assert!(message.contains("position 0"));
    }

    #[test]
    fn test_choice_exhausted_display() {
        let error = ParseError::ChoiceExhausted { position: 7 };
        assert_eq!(error.to_string(), "no alternative matched at position 7");
    }
}
