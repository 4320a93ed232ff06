//! Primitive parsers for the character-string binding

pub mod digits;
pub mod letters;
pub mod literal;

pub use digits::{DigitsParser, digits};
pub use letters::{LettersParser, letters};
pub use literal::{LiteralParser, literal};
