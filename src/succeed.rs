use crate::error::ParseResult;
use crate::input::Input;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value without consuming input
pub struct Succeed<I, T> {
    value: T,
    _input: PhantomData<fn() -> I>,
}

impl<I, T> Succeed<I, T> {
    pub fn new(value: T) -> Self {
        Succeed {
            value,
            _input: PhantomData,
        }
    }
}

impl<I, T> Parser for Succeed<I, T>
where
    I: Input,
    T: Clone,
{
    type Input = I;
    type Output = T;

    fn parse(&self, input: I) -> ParseResult<I, T> {
        Ok((self.value.clone(), input))
    }
}

/// Convenience function to create a succeed parser
pub fn succeed<I, T>(value: T) -> Succeed<I, T>
where
    I: Input,
    T: Clone,
{
    Succeed::new(value)
}
