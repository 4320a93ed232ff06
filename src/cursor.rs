use crate::error::ParseError;

/// Generic cursor trait for parser combinators
///
/// A cursor is an immutable snapshot of parsing progress: the full input plus
/// a position into it. Advancing never mutates; every transition returns a
/// new value, so saved cursors stay valid and `choice` can retry alternatives
/// from a pristine starting point. This abstraction lets the same combinators
/// run over different input models (characters, bits) unchanged.
pub trait Cursor<'src>: Copy + Sized {
    /// The type of elements this cursor iterates over
    type Element;

    /// Get the element at the current cursor position
    ///
    /// Returns `UnexpectedEndOfInput` if positioned at the end of the input
    fn value(&self) -> Result<Self::Element, ParseError>;

    /// Advance the cursor by one element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current position, in this cursor's unit
    ///
    /// For end-of-input cursors this is the length of the input
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the input
    fn eos(&self) -> bool {
        self.value().is_err()
    }
}

/// Conversion from raw input into the initial cursor of its binding.
///
/// This is what lets [`run`](crate::run) accept a `&str` (character binding)
/// or a `&[u8]` (bit binding) directly.
pub trait IntoCursor<'src> {
    type Cursor: Cursor<'src>;

    fn into_cursor(self) -> Self::Cursor;
}
