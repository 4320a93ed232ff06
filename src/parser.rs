use crate::cursor::{Cursor, IntoCursor};
use crate::error::ParseError;

/// Core parser trait for parser combinators
///
/// A parser is a pure transformation from one cursor to the next. Composing
/// parsers builds a description of the grammar; nothing is executed until the
/// assembled parser is applied to a concrete cursor via [`parse`] or [`run`].
/// Parsers are immutable and reusable across any number of runs.
///
/// [`parse`]: Parser::parse
/// [`run`]: crate::run
pub trait Parser<'src> {
    type Cursor: Cursor<'src>;
    type Output;
    type Error: std::error::Error;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success. On
    /// failure the caller's cursor is untouched; retrying is always done
    /// from the cursor the caller already holds.
    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error>;
}

impl<'src, P> Parser<'src> for &P
where
    P: Parser<'src> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        (**self).parse(cursor)
    }
}

impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, for heterogeneous parser lists and recursive grammars
pub type BoxedParser<'src, C, O, E = ParseError> =
    Box<dyn Parser<'src, Cursor = C, Output = O, Error = E> + 'src>;

/// Extension trait to erase a parser's concrete type via boxing
pub trait BoxedExt<'src>: Parser<'src> + Sized + 'src {
    fn boxed(self) -> BoxedParser<'src, Self::Cursor, Self::Output, Self::Error> {
        Box::new(self)
    }
}

impl<'src, P> BoxedExt<'src> for P where P: Parser<'src> + 'src {}

/// Run a parser against raw input
///
/// Builds the initial cursor appropriate to the input's binding (`&str` for
/// the character model, `&[u8]` for the bit model), applies the parser once,
/// and returns the final value together with the cursor it stopped at. This
/// is the only place a fresh cursor is synthesized from raw input.
///
/// # Example
/// ```
/// use cursorcomb::{run, text::literal};
///
/// let (matched, _rest) = run(&literal("hello"), "hello there!").unwrap();
/// assert_eq!(matched, "hello");
/// ```
pub fn run<'src, P, I>(parser: &P, input: I) -> Result<(P::Output, P::Cursor), P::Error>
where
    P: Parser<'src>,
    I: IntoCursor<'src, Cursor = P::Cursor>,
{
    parser.parse(input.into_cursor())
}
