use crate::map::Map;
use crate::parser::Parser;
use crate::recover::Recover;

/// Optional parser: `Some(value)` on success, `None` at the failure's input otherwise
///
/// It is a [`Map`] wrapping the value in `Some` followed by a [`Recover`]
/// producing `None`, so it never fails.
pub type Opt<P> = Recover<
    Map<P, fn(<P as Parser>::Output) -> Option<<P as Parser>::Output>>,
    fn(&str) -> Option<<P as Parser>::Output>,
>;

fn absent<T>(_message: &str) -> Option<T> {
    None
}

/// Convenience function to create an Opt parser
pub fn opt<P>(parser: P) -> Opt<P>
where
    P: Parser,
{
    let present: fn(P::Output) -> Option<P::Output> = Some;
    let absent: fn(&str) -> Option<P::Output> = absent::<P::Output>;
    Recover::new(Map::new(parser, present), absent)
}

/// Extension trait to add .opt() method support for parsers
pub trait OptExt: Parser + Sized {
    fn opt(self) -> Opt<Self> {
        opt(self)
    }
}

impl<P> OptExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::integer;
    use crate::cursors::StringInput;
    use crate::input::Input;
    use crate::strings::lit;
    use crate::then::ThenExt;

    #[test]
    fn test_opt_present() {
        let parser = integer().opt();

        let (value, next) = parser.parse(StringInput::from("12px")).unwrap();
        assert_eq!(value, Some(12));
        assert_eq!(next.remaining(), "px");
    }

    #[test]
    fn test_opt_absent() {
        let parser = integer().opt();

        let (value, next) = parser.parse(StringInput::from("px")).unwrap();
        assert_eq!(value, None);
        assert_eq!(next.offset(), 0);
    }

    #[test]
    fn test_opt_in_sequence() {
        let parser = lit("-").opt().then(integer());

        let ((sign, value), _) = parser.parse(StringInput::from("-+3")).unwrap();
        assert_eq!(sign.as_deref(), Some("-"));
        assert_eq!(value, 3);

        let ((sign, value), _) = parser.parse(StringInput::from("3")).unwrap();
        assert_eq!(sign, None);
        assert_eq!(value, 3);
    }

    #[test]
    fn test_opt_absent_at_failure_input() {
        // "a" then "b" fails at offset 1 on "ax"
        let parser = opt(lit("a").then(lit("b")));

        let (value, next) = parser.parse(StringInput::from("ax")).unwrap();
        assert!(value.is_none());
        assert_eq!(next.offset(), 1);
    }
}
