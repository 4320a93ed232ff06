use crate::cursor::Cursor;
use crate::cursors::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that matches the maximal run of alphabetic characters (one or more)
pub struct LettersParser;

impl<'src> Parser<'src> for LettersParser {
    type Cursor = TextCursor<'src>;
    type Output = String;
    type Error = ParseError;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        match cursor.value() {
            Err(error) => Err(error),
            Ok(first) if !first.is_alphabetic() => Err(ParseError::PatternMismatch {
                expected: "letters",
                position: cursor.position(),
            }),
            Ok(first) => {
                let mut matched = String::new();
                matched.push(first);
                let mut cursor = cursor.next();

                while let Ok(ch) = cursor.value() {
                    if !ch.is_alphabetic() {
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

/// Convenience function to create a LettersParser
pub fn letters() -> LettersParser {
    LettersParser
}
