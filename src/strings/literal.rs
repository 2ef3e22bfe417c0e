use crate::cursors::StringInput;
use crate::error::{Failure, ParseResult};
use crate::input::Input;
use crate::parser::Parser;
use std::borrow::Cow;

// Shared by `Literal` and the `str` impl so both fail the same way
fn match_literal(literal: &str, input: StringInput) -> ParseResult<StringInput, String> {
    let n = literal.len();
    if input.length() >= n && input.peek(n) == Some(literal) {
        let next = input.forward(n);
        Ok((literal.to_string(), next))
    } else {
        Err(Failure::new(
            format!("Expected string literal \"{}\"", literal),
            input,
        ))
    }
}

/// Parser that matches an exact string
///
/// Succeeds only if the remaining input starts with the literal, and then
/// consumes exactly its length.
#[derive(Debug, Clone)]
pub struct Literal {
    literal: Cow<'static, str>,
}

impl Literal {
    pub fn new(literal: impl Into<Cow<'static, str>>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

impl Parser for Literal {
    type Input = StringInput;
    type Output = String;

    fn parse(&self, input: StringInput) -> ParseResult<StringInput, String> {
        match_literal(&self.literal, input)
    }
}

/// Any string slice is a literal parser for itself
impl Parser for str {
    type Input = StringInput;
    type Output = String;

    fn parse(&self, input: StringInput) -> ParseResult<StringInput, String> {
        match_literal(self, input)
    }
}

/// Convenience function to create a Literal parser
pub fn lit(literal: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::or::OrExt;
    use crate::seq::SeqExt;
    use crate::then::ThenExt;

    #[test]
    fn test_exact_match() {
        let (result, next) = lit("hello").parse(StringInput::from("hello")).unwrap();
        assert_eq!(result, "hello");
        assert!(next.is_empty());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let (result, next) = lit("hello").parse(StringInput::from("hello world")).unwrap();
        assert_eq!(result, "hello");
        assert_eq!(next.offset(), 5);
        assert_eq!(next.remaining(), " world");
    }

    #[test]
    fn test_unicode_string() {
        let (result, next) = lit("こんにちは").parse(StringInput::from("こんにちは世界")).unwrap();
        assert_eq!(result, "こんにちは");
        assert_eq!(next.remaining(), "世界");
    }

    #[test]
    fn test_empty_literal() {
        let input = StringInput::from("hello");

        let (result, next) = lit("").parse(input.clone()).unwrap();
        assert_eq!(result, "");
        // Cursor should not advance for empty literal
        assert_eq!(next, input);
    }

    #[test]
    fn test_mismatch() {
        let failure = lit("hello").parse(StringInput::from("help!")).unwrap_err();
        assert_eq!(failure.message(), "Expected string literal \"hello\"");
        // Fails where it started, not at the first differing character
        assert_eq!(failure.offset(), 0);
    }

    #[test]
    fn test_insufficient_input() {
        let input = StringInput::from("say hel").forward(4);

        let failure = lit("hello").parse(input).unwrap_err();
        assert_eq!(failure.to_string(), "Expected string literal \"hello\" at 4");
    }

    #[test]
    fn test_empty_input() {
        let failure = lit("hello").parse(StringInput::from("")).unwrap_err();
        assert_eq!(failure.offset(), 0);
    }

    #[test]
    fn test_case_sensitive() {
        assert!(lit("hello").parse(StringInput::from("Hello")).is_err());
    }

    #[test]
    fn test_owned_literal() {
        let keyword = String::from("while");
        let (result, _) = lit(keyword).parse(StringInput::from("while x")).unwrap();
        assert_eq!(result, "while");
    }

    #[test]
    fn test_str_is_parser() {
        let parser = "<-".or("->");

        let (arrow, next) = parser.parse(StringInput::from("->x")).unwrap();
        assert_eq!(arrow, "->");
        assert_eq!(next.offset(), 2);
    }

    #[test]
    fn test_str_sugar_in_grammar() {
        let list = "[".skip_then("x".seq()).then_skip("]");

        let (items, next) = list.parse(StringInput::from("[xxx]")).unwrap();
        assert_eq!(items.len(), 3);
        assert!(next.is_empty());

        let failure = list.parse(StringInput::from("[xx")).unwrap_err();
        assert_eq!(failure.to_string(), "Expected string literal \"]\" at 3");
    }

    #[test]
    fn test_operators_and_symbols() {
        for symbol in ["<-", "->", "==", "!=", "<=", ">=", "::", "&&", "||"] {
            let (result, _) = lit(symbol).parse(StringInput::from(symbol)).unwrap();
            assert_eq!(result, symbol, "Failed for symbol: {}", symbol);
        }
    }
}
