use crate::parser::Parser;

/// Parser combinator that selects the next parser from the previous result
///
/// Runs the first parser, feeds its output into the selector to pick a
/// continuation parser, then runs that continuation from where the first
/// parser stopped. This is what makes context-sensitive grammars possible:
/// a parsed tag can decide which grammar parses the rest of the input. An
/// error from the first stage short-circuits before the selector is invoked.
pub struct Chain<P, F> {
    parser: P,
    selector: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, selector: F) -> Self {
        Chain { parser, selector }
    }
}

impl<'src, P, F, P2> Parser<'src> for Chain<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src, Cursor = P::Cursor, Error = P::Error>,
{
    type Cursor = P::Cursor;
    type Output = P2::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.selector)(value).parse(cursor)
    }
}

/// Convenience function to create a Chain parser
pub fn chain<'src, P, F, P2>(parser: P, selector: F) -> Chain<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src, Cursor = P::Cursor, Error = P::Error>,
{
    Chain::new(parser, selector)
}

/// Extension trait to add .chain() method support for parsers
pub trait ChainExt<'src>: Parser<'src> + Sized {
    fn chain<F, P2>(self, selector: F) -> Chain<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'src, Cursor = Self::Cursor, Error = Self::Error>,
    {
        Chain::new(self, selector)
    }
}

/// Implement ChainExt for all parsers
impl<'src, P> ChainExt<'src> for P where P: Parser<'src> {}
