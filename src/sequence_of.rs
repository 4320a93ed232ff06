use crate::parser::Parser;

/// Parser combinator that runs a list of parsers in order
///
/// Each parser consumes from where the previous one stopped; the results are
/// collected in order. The first failing sub-parser aborts the whole sequence
/// with its own error, and no later sub-parser is attempted.
///
/// The list is homogeneous in parser type; to sequence parsers of different
/// concrete types, erase them with [`boxed`](crate::parser::BoxedExt::boxed)
/// first, or use [`and`](crate::and::and) for heterogeneous pairs.
pub struct SequenceOf<P> {
    parsers: Vec<P>,
}

impl<P> SequenceOf<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        SequenceOf { parsers }
    }
}

impl<'src, P> Parser<'src> for SequenceOf<P>
where
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, mut cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a SequenceOf parser
pub fn sequence_of<'src, P>(parsers: Vec<P>) -> SequenceOf<P>
where
    P: Parser<'src>,
{
    SequenceOf::new(parsers)
}
