use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that turns a failure into a success
///
/// The recovery function receives the failure message and produces a value.
/// The success is reported at the input the failure carried, so recovering
/// never consumes anything by itself.
pub struct Recover<P, F> {
    parser: P,
    recovery: F,
}

impl<P, F> Recover<P, F> {
    pub fn new(parser: P, recovery: F) -> Self {
        Recover { parser, recovery }
    }
}

impl<P, F> Parser for Recover<P, F>
where
    P: Parser,
    F: Fn(&str) -> P::Output,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        match self.parser.parse(input) {
            Ok(success) => Ok(success),
            Err(failure) => {
                let value = (self.recovery)(failure.message());
                Ok((value, failure.into_next_input()))
            }
        }
    }
}

/// Convenience function to create a Recover parser
pub fn recover<P, F>(parser: P, recovery: F) -> Recover<P, F>
where
    P: Parser,
    F: Fn(&str) -> P::Output,
{
    Recover::new(parser, recovery)
}

/// Extension trait to add .recover() method support for parsers
pub trait RecoverExt: Parser + Sized {
    fn recover<F>(self, recovery: F) -> Recover<Self, F>
    where
        F: Fn(&str) -> Self::Output,
    {
        Recover::new(self, recovery)
    }
}

impl<P> RecoverExt for P where P: Parser {}
