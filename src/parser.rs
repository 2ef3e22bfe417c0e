use crate::error::{Failure, ParseResult};
use crate::input::Input;
use std::sync::Arc;

/// Core parser trait for parser combinators
///
/// A parser is a stateless value: calling [`parse`](Parser::parse) never
/// mutates it, so one grammar can be built once and shared freely, including
/// across threads.
pub trait Parser {
    type Input: Input;
    type Output;

    /// Attempt to parse from the given input
    ///
    /// Returns the parsed value and the input past what was consumed, or a
    /// [`Failure`] carrying the input where the failure is reported.
    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output>;

    /// Like [`parse`](Parser::parse), but also fails if any input is left over
    fn parse_all(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        let (value, next) = self.parse(input)?;
        if next.is_empty() {
            Ok((value, next))
        } else {
            log::debug!(
                "parse succeeded with {} units left at offset {}",
                next.length(),
                next.offset()
            );
            Err(Failure::new("Unparsed input remains", next))
        }
    }
}

impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        (**self).parse(input)
    }
}

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        (**self).parse(input)
    }
}

impl<P> Parser for Arc<P>
where
    P: Parser + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        (**self).parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StringInput;
    use crate::error::ParseResultExt;

    // Consumes a single character
    struct AnyChar;

    impl Parser for AnyChar {
        type Input = StringInput;
        type Output = char;

        fn parse(&self, input: StringInput) -> ParseResult<StringInput, char> {
            match input.remaining().chars().next() {
                Some(ch) => Ok((ch, input.forward(ch.len_utf8()))),
                None => Err(Failure::new("Character expected", input)),
            }
        }
    }

    #[test]
    fn test_parse_leaves_remaining_input() {
        let (ch, next) = AnyChar.parse(StringInput::from("ab")).unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(next.remaining(), "b");
    }

    #[test]
    fn test_parse_all_accepts_full_consumption() {
        let (ch, next) = AnyChar.parse_all(StringInput::from("a")).unwrap();
        assert_eq!(ch, 'a');
        assert!(next.is_empty());
    }

    #[test]
    fn test_parse_all_rejects_leftover_input() {
        let failure = AnyChar.parse_all(StringInput::from("ab")).unwrap_err();
        assert_eq!(failure.message(), "Unparsed input remains");
        assert_eq!(failure.offset(), 1);
        assert_eq!(failure.to_string(), "Unparsed input remains at 1");
    }

    #[test]
    fn test_parse_all_passes_failures_through() {
        let failure = AnyChar.parse_all(StringInput::from("")).unwrap_err();
        assert_eq!(failure.message(), "Character expected");
    }

    #[test]
    fn test_references_and_pointers_are_parsers() {
        let input = StringInput::from("xyz");

        let by_ref = &AnyChar;
        assert!(by_ref.parse(input.clone()).is_success());

        let boxed: Box<dyn Parser<Input = StringInput, Output = char>> = Box::new(AnyChar);
        assert!(boxed.parse(input.clone()).is_success());

        let shared = Arc::new(AnyChar);
        let (ch, _) = shared.parse(input).unwrap();
        assert_eq!(ch, 'x');
    }
}
