use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// How many characters of observed input to quote in a mismatch diagnostic
const MISMATCH_CONTEXT_CHARS: usize = 10;

/// Parser that matches an exact string at the current position
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'src> Parser<'src> for LiteralParser {
    type Cursor = TextCursor<'src>;
    type Output = Cow<'static, str>;
    type Error = ParseError;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let rest = cursor.rest();

        if rest.is_empty() {
            return Err(ParseError::UnexpectedEndOfInput {
                position: cursor.position(),
            });
        }

        if rest.starts_with(self.expected.as_ref()) {
            let cursor = cursor.advance_over(&self.expected);
            return Ok((self.expected.clone(), cursor));
        }

        Err(ParseError::LiteralMismatch {
            expected: self.expected.clone(),
            found: rest.chars().take(MISMATCH_CONTEXT_CHARS).collect(),
            position: cursor.position(),
        })
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}
