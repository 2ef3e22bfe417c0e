use crate::parser::Parser;

/// A type-erased parser that can be stored in statics and shared across threads
///
/// Recursive grammars need this: a parser that contains itself cannot have a
/// finite concrete type.
pub type BoxedParser<I, O> = Box<dyn Parser<Input = I, Output = O> + Send + Sync>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized {
    fn boxed(self) -> BoxedParser<Self::Input, Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<P> BoxedExt for P where P: Parser {}
