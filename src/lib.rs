//! # CursorComb - Parser Combinator Engine
//!
//! A parser combinator engine over an abstract input cursor, with two input
//! models: a character-string binding (literal and character-class matching
//! over `&str`) and a bit-addressed binary binding (single-bit reads and
//! assertions over `&[u8]`). Complex grammars are built from small parsers
//! by pure composition; the engine itself knows nothing about any grammar.
//!
//! - **Zero panics**: all parsing errors travel through `Result` types
//! - **Immutable state**: cursors are `Copy` snapshots, never mutated, so
//!   choice retries and saved positions are always sound
//! - **Composability**: sequencing, ordered choice, repetition, separated
//!   lists, bracketing, deferred recursion, and result-dependent dispatch
//! - **Two bindings, one algebra**: every combinator works unchanged over
//!   characters and bits
//!
//! ```
//! use cursorcomb::{run, text::literal};
//!
//! let parser = literal("hello there!");
//! let (matched, _) = run(&parser, "hello there!").unwrap();
//! assert_eq!(matched, "hello there!");
//! ```

pub mod and;
pub mod between;
pub mod bit;
pub mod chain;
pub mod choice;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod lazy;
pub mod many;
pub mod many1;
pub mod map;
pub mod map_err;
pub mod or;
pub mod parser;
pub mod sep_by;
pub mod sequence_of;
pub mod text;

pub use and::{And, AndExt, and};
pub use between::between;
pub use bit::{bit, is_bit, one_bit, zero_bit};
pub use chain::{Chain, ChainExt, chain};
pub use choice::choice;
pub use cursor::{Cursor, IntoCursor};
pub use cursors::{BitCursor, TextCursor};
pub use error::ParseError;
pub use lazy::lazy;
pub use many::many;
pub use many1::many1;
pub use map::{Map, MapExt, map};
pub use map_err::{MapErr, MapErrExt, map_err};
pub use or::{Or, OrExt, or};
pub use parser::{BoxedExt, BoxedParser, Parser, run};
pub use sep_by::{sep_by, sep_by1};
pub use sequence_of::sequence_of;
