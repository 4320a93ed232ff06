use crate::cursor::Cursor;
use crate::cursors::BitCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that consumes and returns a single bit (0 or 1)
///
/// Use this for fields whose value is data. For fixed-bit-pattern fields
/// (flags, reserved bits) use [`is_bit`] / [`zero_bit`] / [`one_bit`], which
/// assert the value as well.
#[derive(Debug, Copy, Clone)]
pub struct BitParser;

impl<'src> Parser<'src> for BitParser {
    type Cursor = BitCursor<'src>;
    type Output = u8;
    type Error = ParseError;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let bit = cursor.value()?;
        Ok((bit, cursor.next()))
    }
}

/// Parser that matches a specific bit value
#[derive(Debug, Copy, Clone)]
pub struct IsBitParser {
    expected: u8,
}

impl IsBitParser {
    pub fn new(expected: u8) -> Self {
        debug_assert!(expected <= 1);
        IsBitParser { expected }
    }
}

impl<'src> Parser<'src> for IsBitParser {
    type Cursor = BitCursor<'src>;
    type Output = u8;
    type Error = ParseError;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let bit = cursor.value()?;
        if bit != self.expected {
            return Err(ParseError::LiteralMismatch {
                expected: if self.expected == 0 { "0" } else { "1" }.into(),
                found: if bit == 0 { "0" } else { "1" }.to_string(),
                position: cursor.position(),
            });
        }
        Ok((bit, cursor.next()))
    }
}

/// Convenience function to create a BitParser
pub fn bit() -> BitParser {
    BitParser
}

/// Convenience function to create an IsBitParser
pub fn is_bit(expected: u8) -> IsBitParser {
    IsBitParser::new(expected)
}

/// Parser asserting the next bit is 0
pub fn zero_bit() -> IsBitParser {
    IsBitParser::new(0)
}

/// Parser asserting the next bit is 1
pub fn one_bit() -> IsBitParser {
    IsBitParser::new(1)
}
