use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser combinator that transforms the error of a parser using a mapping function
///
/// The mapper receives the underlying error plus the position the failed
/// attempt started at, and only fires on failure; successful results pass
/// through untouched.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<'src, P, F, E2> Parser<'src> for MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Error, usize) -> E2,
    E2: std::error::Error,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = E2;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let position = cursor.position();
        self.parser
            .parse(cursor)
            .map_err(|error| (self.mapper)(error, position))
    }
}

/// Convenience function to create a MapErr parser
pub fn map_err<'src, P, F, E2>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Error, usize) -> E2,
    E2: std::error::Error,
{
    MapErr::new(parser, mapper)
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'src>: Parser<'src> + Sized {
    fn map_err<F, E2>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error, usize) -> E2,
        E2: std::error::Error,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'src, P> MapErrExt<'src> for P where P: Parser<'src> {}
