use crate::error::{Failure, ParseResult};
use crate::parser::Parser;

/// Parser combinator that hands a failure to a function deciding the outcome
///
/// The function can produce a success, a more specific failure, or resume
/// from a different input. Successes pass through untouched.
pub struct TryRecover<P, F> {
    parser: P,
    recovery: F,
}

impl<P, F> TryRecover<P, F> {
    pub fn new(parser: P, recovery: F) -> Self {
        TryRecover { parser, recovery }
    }
}

impl<P, F> Parser for TryRecover<P, F>
where
    P: Parser,
    F: Fn(Failure<P::Input>) -> ParseResult<P::Input, P::Output>,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        match self.parser.parse(input) {
            Ok(success) => Ok(success),
            Err(failure) => (self.recovery)(failure),
        }
    }
}

/// Convenience function to create a TryRecover parser
pub fn try_recover<P, F>(parser: P, recovery: F) -> TryRecover<P, F>
where
    P: Parser,
    F: Fn(Failure<P::Input>) -> ParseResult<P::Input, P::Output>,
{
    TryRecover::new(parser, recovery)
}

/// Extension trait to add .try_recover() method support for parsers
pub trait TryRecoverExt: Parser + Sized {
    fn try_recover<F>(self, recovery: F) -> TryRecover<Self, F>
    where
        F: Fn(Failure<Self::Input>) -> ParseResult<Self::Input, Self::Output>,
    {
        TryRecover::new(self, recovery)
    }
}

impl<P> TryRecoverExt for P where P: Parser {}
