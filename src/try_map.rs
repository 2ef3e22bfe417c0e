use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that lets a successful parse be rejected after the fact
///
/// The function receives the value and the input past it, and decides the
/// final outcome itself. Failures of the wrapped parser pass through untouched.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<P, F, U> Parser for TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output, P::Input) -> ParseResult<P::Input, U>,
{
    type Input = P::Input;
    type Output = U;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        let (value, next) = self.parser.parse(input)?;
        (self.mapper)(value, next)
    }
}

/// Convenience function to create a TryMap parser
pub fn try_map<P, F, U>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output, P::Input) -> ParseResult<P::Input, U>,
{
    TryMap::new(parser, mapper)
}

/// Extension trait to add .try_map() method support for parsers
pub trait TryMapExt: Parser + Sized {
    fn try_map<F, U>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output, Self::Input) -> ParseResult<Self::Input, U>,
    {
        TryMap::new(self, mapper)
    }
}

impl<P> TryMapExt for P where P: Parser {}
