use crate::cursor::{Cursor, IntoCursor};
use crate::error::ParseError;

/// Cursor over a byte buffer, one bit at a time
///
/// `position()` is a bit offset; bit 0 of the stream is the most significant
/// bit of the first byte (network bit ordering). The element read at any
/// position is always 0 or 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BitCursor<'src> {
    data: &'src [u8],
    position: usize,
}

impl<'src> BitCursor<'src> {
    pub fn new(data: &'src [u8]) -> Self {
        BitCursor { data, position: 0 }
    }

    /// The full buffer this cursor was created over
    pub fn data(&self) -> &'src [u8] {
        self.data
    }

    /// Total number of addressable bits
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8
    }
}

impl<'src> Cursor<'src> for BitCursor<'src> {
    type Element = u8;

    fn value(&self) -> Result<Self::Element, ParseError> {
        let byte_offset = self.position / 8;
        if byte_offset >= self.data.len() {
            return Err(ParseError::UnexpectedEndOfInput {
                position: self.position,
            });
        }

        let bit_offset = 7 - (self.position % 8);
        Ok((self.data[byte_offset] >> bit_offset) & 1)
    }

    fn next(self) -> Self {
        BitCursor {
            data: self.data,
            position: (self.position + 1).min(self.bit_len()),
        }
    }

    fn position(&self) -> usize {
        self.position
    }
}

impl<'src> IntoCursor<'src> for &'src [u8] {
    type Cursor = BitCursor<'src>;

    fn into_cursor(self) -> Self::Cursor {
        BitCursor::new(self)
    }
}

impl<'src, const N: usize> IntoCursor<'src> for &'src [u8; N] {
    type Cursor = BitCursor<'src>;

    fn into_cursor(self) -> Self::Cursor {
        BitCursor::new(self)
    }
}
