use crate::input::Input;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Outcome of a parse step
///
/// On success the value comes paired with the input just past what was
/// consumed. On failure the [`Failure`] carries the input where the failure is
/// reported. Either way the caller gets exactly one cursor to resume from.
pub type ParseResult<I, O> = Result<(O, I), Failure<I>>;

/// A failed parse: a message and the input position it was reported at
///
/// This is the only error kind a parser produces. It is an ordinary value, so
/// combinators pass it along, replace it, or turn it into a success without
/// any unwinding.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<I> {
    message: Cow<'static, str>,
    next: I,
}

impl<I> Failure<I> {
    pub fn new(message: impl Into<Cow<'static, str>>, next: I) -> Self {
        Failure {
            message: message.into(),
            next,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The input this failure was reported at
    pub fn next_input(&self) -> &I {
        &self.next
    }

    pub fn into_next_input(self) -> I {
        self.next
    }

    pub fn into_parts(self) -> (Cow<'static, str>, I) {
        (self.message, self.next)
    }
}

impl<I: Input> Failure<I> {
    /// Offset of the input this failure was reported at
    pub fn offset(&self) -> usize {
        self.next.offset()
    }

    /// The message rendered as `"<message> at <offset>"`
    pub fn full_error_message(&self) -> String {
        self.next.full_error_message(&self.message)
    }
}

impl<I: Input> fmt::Display for Failure<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_error_message())
    }
}

impl<I: Input + fmt::Debug> Error for Failure<I> {}

/// Predicates and accessors shared by both cases of a [`ParseResult`]
pub trait ParseResultExt<I> {
    fn is_success(&self) -> bool;

    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The cursor carried by either case
    fn next_input(&self) -> &I;
}

impl<I, O> ParseResultExt<I> for ParseResult<I, O> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn next_input(&self) -> &I {
        match self {
            Ok((_, next)) => next,
            Err(failure) => failure.next_input(),
        }
    }
}
