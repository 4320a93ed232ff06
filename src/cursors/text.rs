use crate::cursor::{Cursor, IntoCursor};
use crate::error::ParseError;

/// Cursor over a string, one character at a time
///
/// `position()` counts characters, not bytes; a byte offset is carried
/// alongside so each step stays O(1) without rescanning the prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextCursor<'src> {
    source: &'src str,
    byte_offset: usize,
    char_offset: usize,
}

impl<'src> TextCursor<'src> {
    pub fn new(source: &'src str) -> Self {
        TextCursor {
            source,
            byte_offset: 0,
            char_offset: 0,
        }
    }

    /// The full input this cursor was created over
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The unconsumed remainder of the input
    pub fn rest(&self) -> &'src str {
        &self.source[self.byte_offset..]
    }

    /// Step over a prefix of `rest()` that was already verified to match.
    /// `matched` must be exactly that prefix or positions go out of sync.
    pub(crate) fn advance_over(self, matched: &str) -> Self {
        debug_assert!(self.rest().starts_with(matched));
        TextCursor {
            source: self.source,
            byte_offset: self.byte_offset + matched.len(),
            char_offset: self.char_offset + matched.chars().count(),
        }
    }
}

impl<'src> Cursor<'src> for TextCursor<'src> {
    type Element = char;

    fn value(&self) -> Result<Self::Element, ParseError> {
        self.rest()
            .chars()
            .next()
            .ok_or(ParseError::UnexpectedEndOfInput {
                position: self.char_offset,
            })
    }

    fn next(self) -> Self {
        match self.value() {
            Ok(ch) => TextCursor {
                source: self.source,
                byte_offset: self.byte_offset + ch.len_utf8(),
                char_offset: self.char_offset + 1,
            },
            Err(_) => self,
        }
    }

    fn position(&self) -> usize {
        self.char_offset
    }
}

impl<'src> IntoCursor<'src> for &'src str {
    type Cursor = TextCursor<'src>;

    fn into_cursor(self) -> Self::Cursor {
        TextCursor::new(self)
    }
}

impl<'src> IntoCursor<'src> for &'src String {
    type Cursor = TextCursor<'src>;

    fn into_cursor(self) -> Self::Cursor {
        TextCursor::new(self)
    }
}
