//! Terminal parsers over [`StringInput`]
//!
//! Everything else in the crate works on any [`Input`](crate::input::Input);
//! this module closes the gap to text grammars with literal and regular
//! expression matching. A plain `&str` is a literal parser as well, so
//! `"(".skip_then(expr).then_skip(")")` reads like the grammar it implements.

pub mod literal;
pub mod pattern;

pub use literal::{Literal, lit};
pub use pattern::{Re, re};

use crate::cursors::StringInput;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parse all of `text` with `parser`, failing if anything is left over
pub fn parse_all<P>(text: &str, parser: &P) -> ParseResult<StringInput, P::Output>
where
    P: Parser<Input = StringInput> + ?Sized,
{
    parser.parse_all(StringInput::from(text))
}
