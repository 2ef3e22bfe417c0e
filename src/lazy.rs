use crate::error::ParseResult;
use crate::parser::Parser;
use once_cell::sync::OnceCell;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// This is what breaks cycles in recursive grammars: the factory is only
/// called on the first parse, once, and the parser it returns is kept for
/// every later call. Concurrent first use from several threads is fine, a
/// single factory call wins and everyone sees its result.
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceCell<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
        }
    }

    fn get(&self) -> &P {
        self.parser.get_or_init(|| {
            log::debug!("building lazily referenced parser");
            (self.factory)()
        })
    }
}

impl<F, P> Parser for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    type Input = P::Input;
    type Output = P::Output;

    fn parse(&self, input: Self::Input) -> ParseResult<Self::Input, Self::Output> {
        self.get().parse(input)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
