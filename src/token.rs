use crate::cursors::SliceInput;
use crate::error::{Failure, ParseResult};
use crate::input::Input;
use crate::parser::Parser;
use std::fmt;

/// Parser that matches one specific element of a token slice
///
/// The counterpart of [`lit`](crate::strings::lit) for non-textual input,
/// e.g. the output of a separate lexer.
#[derive(Debug, Clone)]
pub struct Token<T> {
    expected: T,
}

impl<T> Token<T> {
    pub fn new(expected: T) -> Self {
        Token { expected }
    }
}

impl<T> Parser for Token<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    type Input = SliceInput<T>;
    type Output = T;

    fn parse(&self, input: SliceInput<T>) -> ParseResult<SliceInput<T>, T> {
        let found = input
            .remaining()
            .first()
            .filter(|found| **found == self.expected)
            .cloned();

        match found {
            Some(value) => Ok((value, input.forward(1))),
            None => Err(Failure::new(
                format!("Expected token {:?}", self.expected),
                input,
            )),
        }
    }
}

/// Convenience function to create a Token parser
pub fn token<T>(expected: T) -> Token<T>
where
    T: Clone + PartialEq + fmt::Debug,
{
    Token::new(expected)
}
