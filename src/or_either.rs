use crate::either::Either;
use crate::error::ParseResult;
use crate::input::Input;
use crate::parser::Parser;

/// Ordered alternative whose output records which side matched
///
/// Control flow is exactly that of [`Or`](crate::or::Or), including resuming
/// the second parser from the first one's failure input, but the two sides
/// may produce different types.
pub struct OrEither<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> OrEither<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        OrEither { parser1, parser2 }
    }
}

impl<P1, P2> Parser for OrEither<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    type Input = P1::Input;
    type Output = Either<P1::Output, P2::Output>;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        match self.parser1.parse(input) {
            Ok((value, next)) => Ok((Either::Left(value), next)),
            Err(failure) => {
                log::trace!(
                    "left alternative failed at offset {}: {}",
                    failure.next_input().offset(),
                    failure.message()
                );
                let (value, next) = self.parser2.parse(failure.into_next_input())?;
                Ok((Either::Right(value), next))
            }
        }
    }
}

/// Convenience function to create an OrEither parser
pub fn or_either<P1, P2>(parser1: P1, parser2: P2) -> OrEither<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    OrEither::new(parser1, parser2)
}

/// Extension trait to add .or_either() method support for parsers
pub trait OrEitherExt: Parser + Sized {
    fn or_either<P>(self, other: P) -> OrEither<Self, P>
    where
        P: Parser<Input = Self::Input>,
    {
        OrEither::new(self, other)
    }
}

impl<P> OrEitherExt for P where P: Parser {}
