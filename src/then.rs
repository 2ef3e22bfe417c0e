use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The second parser starts where the first one stopped. If the first parser
/// fails the second never runs and the first failure is returned as is; if
/// the second fails, its failure is returned.
///
/// Note: When chaining multiple `.then()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
/// [`then_skip`](ThenExt::then_skip) and [`skip_then`](ThenExt::skip_then)
/// keep only one side and avoid most of the nesting in practice.
///
/// Example:
/// ```
/// use dslparse::cursors::StringInput;
/// use dslparse::parser::Parser;
/// use dslparse::strings::lit;
/// use dslparse::then::ThenExt;
///
/// let parser = lit("let").then_skip(lit(" ")).then(lit("x"));
/// let ((keyword, name), _) = parser.parse(StringInput::from("let x")).unwrap();
/// assert_eq!(keyword, "let");
/// assert_eq!(name, "x");
/// ```
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Then { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Then<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    type Input = P1::Input;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        let (first, next) = self.parser1.parse(input)?;
        let (second, next) = self.parser2.parse(next)?;
        Ok(((first, second), next))
    }
}

/// Sequence of two parsers keeping only the first result
pub struct ThenSkip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> ThenSkip<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        ThenSkip { parser1, parser2 }
    }
}

impl<P1, P2> Parser for ThenSkip<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    type Input = P1::Input;
    type Output = P1::Output;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        let (first, next) = self.parser1.parse(input)?;
        let (_, next) = self.parser2.parse(next)?;
        Ok((first, next))
    }
}

/// Sequence of two parsers keeping only the second result
pub struct SkipThen<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> SkipThen<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        SkipThen { parser1, parser2 }
    }
}

impl<P1, P2> Parser for SkipThen<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    type Input = P1::Input;
    type Output = P2::Output;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        let (_, next) = self.parser1.parse(input)?;
        self.parser2.parse(next)
    }
}

/// Convenience function to create a Then parser
pub fn then<P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2>
where
    P1: Parser,
    P2: Parser<Input = P1::Input>,
{
    Then::new(parser1, parser2)
}

/// Extension trait to add .then(), .then_skip() and .skip_then() to parsers
pub trait ThenExt: Parser + Sized {
    fn then<P>(self, other: P) -> Then<Self, P>
    where
        P: Parser<Input = Self::Input>,
    {
        Then::new(self, other)
    }

    fn then_skip<P>(self, other: P) -> ThenSkip<Self, P>
    where
        P: Parser<Input = Self::Input>,
    {
        ThenSkip::new(self, other)
    }

    fn skip_then<P>(self, other: P) -> SkipThen<Self, P>
    where
        P: Parser<Input = Self::Input>,
    {
        SkipThen::new(self, other)
    }
}

impl<P> ThenExt for P where P: Parser {}
