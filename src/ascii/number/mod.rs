//! Numeric leaf grammars
//!
//! Each one is an ordinary combinator expression: a regex terminal, an `or`
//! with a `fail` giving a friendlier message than the bare regex mismatch,
//! then a conversion of the matched text. The `*_str` variants stop before
//! the conversion and return the matched text.

pub mod digit;
pub mod float;
pub mod integer;

pub use digit::{digit, digit_str};
pub use float::{float, float_str};
pub use integer::{integer, integer_str};
