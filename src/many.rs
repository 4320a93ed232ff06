use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Applies the parser repeatedly until it fails, discarding the failing
/// attempt entirely; the cursor stops where the last success left it. Never
/// fails itself — zero matches yield an empty list and an unmoved cursor.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, mut cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let mut results = Vec::new();

        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}
