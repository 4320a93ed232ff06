use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: chaining multiple `.and()` calls produces nested tuples like
/// `(((a, b), c), d)` rather than flat ones. The nesting mirrors the parsing
/// order and destructures explicitly; for homogeneous sequences of arbitrary
/// length use [`sequence_of`](crate::sequence_of::sequence_of) instead.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'src, P1, P2> Parser<'src> for And<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor, Error = P1::Error>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);
    type Error = P1::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'src, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src, Cursor = P1::Cursor, Error = P1::Error>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'src>: Parser<'src> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'src, Cursor = Self::Cursor, Error = Self::Error>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'src, P> AndExt<'src> for P where P: Parser<'src> {}
