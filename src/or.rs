use crate::error::ParseResult;
use crate::input::Input;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser runs from the input the first one's failure carried,
/// not from where the first one started. Terminals fail where they started,
/// so for them this is the same thing; a parser that consumes some input and
/// then fails moves the retry point forward.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output>,
{
    type Input = P1::Input;
    type Output = P1::Output;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        match self.parser1.parse(input) {
            Ok(success) => Ok(success),
            Err(failure) => {
                log::trace!(
                    "first alternative failed at offset {}: {}",
                    failure.next_input().offset(),
                    failure.message()
                );
                self.parser2.parse(failure.into_next_input())
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Input = Self::Input, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::StringInput;
    use crate::fail::fail;
    use crate::strings::lit;
    use crate::then::ThenExt;

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(lit("a"), lit("b"));

        let (value, next) = parser.parse(StringInput::from("abc")).unwrap();
        assert_eq!(value, "a");
        assert_eq!(next.remaining(), "bc");
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(lit("a"), lit("b"));

        let (value, next) = parser.parse(StringInput::from("bcd")).unwrap();
        assert_eq!(value, "b");
        assert_eq!(next.remaining(), "cd");
    }

    #[test]
    fn test_or_both_fail() {
        let parser = or(lit("a"), lit("b"));

        let failure = parser.parse(StringInput::from("xyz")).unwrap_err();
        // The right-hand failure is the one reported
        assert_eq!(failure.message(), "Expected string literal \"b\"");
    }

    #[test]
    fn test_or_first_wins_when_both_match() {
        let parser = lit("ab").or(lit("a"));

        let (value, next) = parser.parse(StringInput::from("abc")).unwrap();
        assert_eq!(value, "ab");
        assert_eq!(next.offset(), 2);
    }

    #[test]
    fn test_or_replaces_message() {
        let parser = lit("(").or(fail("Opening parenthesis expected"));

        let failure = parser.parse(StringInput::from("x")).unwrap_err();
        assert_eq!(failure.to_string(), "Opening parenthesis expected at 0");
    }

    #[test]
    fn test_or_retries_from_failure_input() {
        // "a" then "b" consumes the "a" before failing at offset 1, so the
        // right-hand side starts there rather than at offset 0
        let parser = lit("a").skip_then(lit("b")).or(lit("c"));

        let (value, next) = parser.parse(StringInput::from("ac")).unwrap();
        assert_eq!(value, "c");
        assert_eq!(next.offset(), 2);

        assert!(parser.parse(StringInput::from("cb")).is_ok());
        assert!(parser.parse(StringInput::from("abd")).is_ok());
        let failure = parser.parse(StringInput::from("ad")).unwrap_err();
        assert_eq!(failure.message(), "Expected string literal \"c\"");
        assert_eq!(failure.offset(), 1);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = lit("a").or(lit("b")).or(lit("c")).or(lit("d"));

        let (value, next) = parser.parse(StringInput::from("d")).unwrap();
        assert_eq!(value, "d");
        assert!(next.is_empty());
    }
}
