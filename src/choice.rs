use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that tries alternatives in order and commits to the first success
///
/// Every alternative is attempted against the same starting cursor, strictly
/// left to right; the first success wins even when a later alternative would
/// also match, so grammars should order alternatives from most to least
/// specific. If all alternatives fail, the aggregate fails with
/// [`ParseError::ChoiceExhausted`] at the starting position.
///
/// The list is homogeneous in parser type; erase concrete types with
/// [`boxed`](crate::parser::BoxedExt::boxed) to mix alternatives, or use
/// [`or`](crate::or::or) for two-way choice between distinct types.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'src, P> Parser<'src> for Choice<P>
where
    P: Parser<'src, Error = ParseError>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = ParseError;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        for parser in &self.parsers {
            if let Ok(result) = parser.parse(cursor) {
                return Ok(result);
            }
        }

        Err(ParseError::ChoiceExhausted {
            position: cursor.position(),
        })
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'src, P>(parsers: Vec<P>) -> Choice<P>
where
    P: Parser<'src, Error = ParseError>,
{
    Choice::new(parsers)
}
