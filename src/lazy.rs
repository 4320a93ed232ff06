use crate::parser::Parser;
use std::marker::PhantomData;

/// A lazy parser that defers the construction of the actual parser until parse time
///
/// The factory is not invoked when the grammar is assembled, only when the
/// combined parser actually runs. This is what allows self-referential
/// grammars: a recursive branch wrapped in `lazy` is never built during
/// construction, so definition terminates, and recursion unfolds one level
/// per consumed input during the parse instead.
pub struct Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    factory: F,
    _phantom: PhantomData<&'src ()>,
}

impl<'src, F, P> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _phantom: PhantomData,
        }
    }
}

impl<'src, F, P> Parser<'src> for Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        (self.factory)().parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'src, F, P>(factory: F) -> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    Lazy::new(factory)
}
