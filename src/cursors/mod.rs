pub mod bit;
pub mod text;

pub use bit::BitCursor;
pub use text::TextCursor;
