use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, `content`, `close` in order and returns just the content's
/// value with both delimiter results discarded. Fails if any of the three
/// fails, with that parser's own error.
pub struct Between<L, P, R> {
    open: L,
    content: P,
    close: R,
}

impl<L, P, R> Between<L, P, R> {
    pub fn new(open: L, content: P, close: R) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'src, L, P, R> Parser<'src> for Between<L, P, R>
where
    P: Parser<'src>,
    L: Parser<'src, Cursor = P::Cursor, Error = P::Error>,
    R: Parser<'src, Cursor = P::Cursor, Error = P::Error>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Between parser
pub fn between<'src, L, P, R>(open: L, content: P, close: R) -> Between<L, P, R>
where
    P: Parser<'src>,
    L: Parser<'src, Cursor = P::Cursor, Error = P::Error>,
    R: Parser<'src, Cursor = P::Cursor, Error = P::Error>,
{
    Between::new(open, content, close)
}
