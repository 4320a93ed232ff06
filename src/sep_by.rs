use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or more values separated by a separator
///
/// Alternates value, separator, value, ... until either fails, returning the
/// collected values with separators discarded. Never fails itself: zero
/// values yield an empty list and an unmoved cursor. A separator whose
/// following value fails is backtracked, so the cursor always stops right
/// after the last successful value.
pub struct SepBy<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SepBy<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SepBy { parser, separator }
    }
}

fn collect_separated<'src, P, PS>(
    parser: &P,
    separator: &PS,
    cursor: P::Cursor,
) -> (Vec<P::Output>, P::Cursor)
where
    P: Parser<'src>,
    PS: Parser<'src, Cursor = P::Cursor>,
{
    let mut results = Vec::new();
    let mut cursor = cursor;

    let Ok((first_value, next_cursor)) = parser.parse(cursor) else {
        return (results, cursor);
    };
    results.push(first_value);
    cursor = next_cursor;

    loop {
        let Ok((_, after_separator)) = separator.parse(cursor) else {
            break;
        };
        // Only commit the separator when a value follows it.
        let Ok((value, next_cursor)) = parser.parse(after_separator) else {
            break;
        };
        results.push(value);
        cursor = next_cursor;
    }

    (results, cursor)
}

impl<'src, P, PS> Parser<'src> for SepBy<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        Ok(collect_separated(&self.parser, &self.separator, cursor))
    }
}

/// Parser combinator that matches one or more values separated by a separator
///
/// Same as [`SepBy`] but fails with [`ParseError::EmptyRepetition`] when no
/// value could be captured.
pub struct SepBy1<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SepBy1<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SepBy1 { parser, separator }
    }
}

impl<'src, P, PS> Parser<'src> for SepBy1<P, PS>
where
    P: Parser<'src, Error = ParseError>,
    PS: Parser<'src, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = ParseError;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let start_position = cursor.position();
        let (results, cursor) = collect_separated(&self.parser, &self.separator, cursor);

        if results.is_empty() {
            return Err(ParseError::EmptyRepetition {
                position: start_position,
            });
        }
        Ok((results, cursor))
    }
}

/// Convenience function to create a SepBy parser
pub fn sep_by<'src, P, PS>(parser: P, separator: PS) -> SepBy<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src, Cursor = P::Cursor>,
{
    SepBy::new(parser, separator)
}

/// Convenience function to create a SepBy1 parser
pub fn sep_by1<'src, P, PS>(parser: P, separator: PS) -> SepBy1<P, PS>
where
    P: Parser<'src, Error = ParseError>,
    PS: Parser<'src, Cursor = P::Cursor>,
{
    SepBy1::new(parser, separator)
}
