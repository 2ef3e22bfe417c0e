use crate::error::ParseResult;
use crate::input::Input;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Stops at the first failure, whose message and input are
/// dropped, and reports the input after the last success. A success that
/// consumes nothing also stops the repetition, without being recorded, so
/// `seq(opt(p))` terminates.
pub struct Seq<P> {
    parser: P,
}

impl<P> Seq<P> {
    pub fn new(parser: P) -> Self {
        Seq { parser }
    }
}

impl<P> Parser for Seq<P>
where
    P: Parser,
{
    type Input = P::Input;
    type Output = Vec<P::Output>;

    fn parse(&self, mut input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        let mut results = Vec::new();

        // A failed attempt is only evaluated, the input it was given is kept
        while let Ok((value, next)) = self.parser.parse(input.clone()) {
            if next.offset() == input.offset() {
                break;
            }
            results.push(value);
            input = next;
        }

        Ok((results, input))
    }
}

/// Convenience function to create a Seq parser
pub fn seq<P>(parser: P) -> Seq<P>
where
    P: Parser,
{
    Seq::new(parser)
}

/// Extension trait to add .seq() method support for parsers
pub trait SeqExt: Parser + Sized {
    fn seq(self) -> Seq<Self> {
        Seq::new(self)
    }
}

impl<P> SeqExt for P where P: Parser {}
