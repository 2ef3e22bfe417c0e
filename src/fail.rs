use crate::error::{Failure, ParseResult};
use crate::input::Input;
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with a fixed message without consuming input
///
/// Mostly useful as the last branch of an [`or`](crate::or::OrExt::or) to
/// replace a terminal's generic message with a friendlier one.
pub struct Fail<I, T> {
    message: Cow<'static, str>,
    _marker: PhantomData<fn() -> (I, T)>,
}

impl<I, T> Fail<I, T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

impl<I, T> Parser for Fail<I, T>
where
    I: Input,
{
    type Input = I;
    type Output = T;

    fn parse(&self, input: I) -> ParseResult<I, T> {
        Err(Failure::new(self.message.clone(), input))
    }
}

/// Convenience function to create a fail parser
pub fn fail<I, T>(message: impl Into<Cow<'static, str>>) -> Fail<I, T>
where
    I: Input,
{
    Fail::new(message)
}
