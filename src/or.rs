use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both attempts start from the same pristine cursor; a partial advance by
/// the first parser never leaks into the second attempt. When both fail, the
/// error that progressed furthest into the input is reported, since that is
/// the likelier diagnosis.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'src, P1, P2, O> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src, Output = O, Error = ParseError>,
    P2: Parser<'src, Cursor = P1::Cursor, Output = O, Error = ParseError>,
{
    type Cursor = P1::Cursor;
    type Output = O;
    type Error = ParseError;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let first_error = match self.parser1.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(error) => error,
        };

        match self.parser2.parse(cursor) {
            Ok(result) => Ok(result),
            Err(second_error) if second_error.position() > first_error.position() => {
                Err(second_error)
            }
            Err(_) => Err(first_error),
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'src, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'src, Output = O, Error = ParseError>,
    P2: Parser<'src, Cursor = P1::Cursor, Output = O, Error = ParseError>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src, Error = ParseError> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor, Output = Self::Output, Error = ParseError>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, P> OrExt<'src> for P where P: Parser<'src, Error = ParseError> {}
