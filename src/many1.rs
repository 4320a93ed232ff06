use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Same repetition as [`many`](crate::many::many), but zero matches is a
/// failure: [`ParseError::EmptyRepetition`] at the starting position.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'src, P> Parser<'src> for Many1<P>
where
    P: Parser<'src, Error = ParseError>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = ParseError;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let Ok((first_value, mut cursor)) = self.parser.parse(cursor) else {
            return Err(ParseError::EmptyRepetition {
                position: cursor.position(),
            });
        };

        let mut results = vec![first_value];
        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'src, P>(parser: P) -> Many1<P>
where
    P: Parser<'src, Error = ParseError>,
{
    Many1::new(parser)
}
