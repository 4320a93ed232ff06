use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that matches the maximal run of decimal digits (one or more)
///
/// The result is the matched digit string. Numeric conversion is left to the
/// caller: a digit run can be longer than any fixed-width integer, so the
/// choice of target type (and overflow policy) belongs to the grammar author.
pub struct DigitsParser;

impl<'src> Parser<'src> for DigitsParser {
    type Cursor = TextCursor<'src>;
    type Output = String;
    type Error = ParseError;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        match cursor.value() {
            Err(error) => Err(error),
            Ok(first) if !first.is_ascii_digit() => Err(ParseError::PatternMismatch {
                expected: "digits",
                position: cursor.position(),
            }),
            Ok(first) => {
                let mut matched = String::new();
                matched.push(first);
                let mut cursor = cursor.next();

                while let Ok(ch) = cursor.value() {
                    if !ch.is_ascii_digit() {
                        break;
                    }
                    matched.push(ch);
                    cursor = cursor.next();
                }

                Ok((matched, cursor))
            }
        }
    }
}

/// Convenience function to create a DigitsParser
pub fn digits() -> DigitsParser {
    DigitsParser
}
