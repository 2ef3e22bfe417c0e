//! # dslparse - Parser Combinator Library
//!
//! A small, generic parser combinator engine for building parsers of small
//! domain-specific languages.
//!
//! A grammar is assembled from terminals (exact strings, regular
//! expressions, numbers, tokens) and combinators (sequencing, ordered
//! choice, repetition, option, mapping, recovery). Every parser is a plain
//! value implementing [`Parser`]: it takes an immutable input cursor and
//! either succeeds with a value and the cursor after the consumed input, or
//! fails with a message and the cursor where it stopped.
//!
//! - **No panics on bad input**: failures are values, see [`Failure`]
//! - **Immutable cursors**: inputs share their source and never mutate
//! - **Recursive grammars**: close cycles with [`lazy`] and [`BoxedParser`]
//!
//! ```
//! use dslparse::prelude::*;
//!
//! let list = "[".skip_then(integer().then_skip(opt(",")).seq()).then_skip("]");
//! let (values, _) = parse_all("[1,-2,3]", &list).unwrap();
//! assert_eq!(values, vec![1, -2, 3]);
//! ```

pub mod ascii;
pub mod boxed;
pub mod cursors;
pub mod either;
pub mod error;
pub mod fail;
pub mod input;
pub mod lazy;
pub mod map;
pub mod opt;
pub mod or;
pub mod or_either;
pub mod parser;
pub mod recover;
pub mod seq;
pub mod strings;
pub mod succeed;
pub mod then;
pub mod token;
pub mod try_map;
pub mod try_recover;

pub use boxed::BoxedParser;
pub use cursors::{Cursor, SliceInput, SliceSource, StringInput, StringSource};
pub use either::Either;
pub use error::{Failure, ParseResult, ParseResultExt};
pub use input::{Input, Source};
pub use lazy::lazy;
pub use parser::Parser;

/// Everything needed to write a grammar, in one import
pub mod prelude {
    pub use crate::ascii::number::{digit, digit_str, float, float_str, integer, integer_str};
    pub use crate::boxed::{BoxedExt, BoxedParser};
    pub use crate::cursors::{SliceInput, StringInput};
    pub use crate::either::Either;
    pub use crate::error::{Failure, ParseResult, ParseResultExt};
    pub use crate::fail::fail;
    pub use crate::input::Input;
    pub use crate::lazy::lazy;
    pub use crate::map::MapExt;
    pub use crate::opt::{OptExt, opt};
    pub use crate::or::OrExt;
    pub use crate::or_either::OrEitherExt;
    pub use crate::parser::Parser;
    pub use crate::recover::RecoverExt;
    pub use crate::seq::{SeqExt, seq};
    pub use crate::strings::{lit, parse_all, re};
    pub use crate::succeed::succeed;
    pub use crate::then::ThenExt;
    pub use crate::token::token;
    pub use crate::try_map::TryMapExt;
    pub use crate::try_recover::TryRecoverExt;
}
