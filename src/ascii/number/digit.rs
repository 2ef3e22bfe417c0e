use crate::cursors::StringInput;
use crate::fail::fail;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::strings::Re;
use once_cell::sync::Lazy;

static DIGIT: Lazy<Re> = Lazy::new(|| Re::new("[0-9]").expect("digit pattern is valid"));

/// Parser that matches a single ASCII digit and returns it as text
pub fn digit_str() -> impl Parser<Input = StringInput, Output = String> + Send + Sync {
    Re::clone(&DIGIT).or(fail("Digit expected"))
}

/// Parser that matches a single ASCII digit and returns its value
pub fn digit() -> impl Parser<Input = StringInput, Output = u32> + Send + Sync {
    // The text is exactly one ASCII digit
    digit_str().map(|text| text.chars().filter_map(|ch| ch.to_digit(10)).sum::<u32>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Input;
    use crate::seq::SeqExt;

    #[test]
    fn test_valid_digits() {
        for (text, expected) in [("0", 0), ("5", 5), ("9", 9)] {
            let (value, next) = digit().parse(StringInput::from(text)).unwrap();
            assert_eq!(value, expected);
            assert!(next.is_empty());
        }
    }

    #[test]
    fn test_single_digit_only() {
        let (value, next) = digit().parse(StringInput::from("42")).unwrap();
        assert_eq!(value, 4);
        assert_eq!(next.remaining(), "2");
    }

    #[test]
    fn test_digit_str() {
        let (text, _) = digit_str().parse(StringInput::from("7a")).unwrap();
        assert_eq!(text, "7");
    }

    #[test]
    fn test_invalid_digit() {
        let failure = digit().parse(StringInput::from("a")).unwrap_err();
        assert_eq!(failure.to_string(), "Digit expected at 0");
    }

    #[test]
    fn test_non_ascii_digit_rejected() {
        // Arabic-Indic digit one
        assert!(digit().parse(StringInput::from("١")).is_err());
    }

    #[test]
    fn test_digits_stop_at_non_ascii_digit() {
        let (values, next) = digit().seq().parse(StringInput::from("12٣")).unwrap();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(next.remaining(), "٣");
    }

    #[test]
    fn test_digits() {
        let (values, next) = digit().seq().parse(StringInput::from("2024-")).unwrap();
        assert_eq!(values, vec![2, 0, 2, 4]);
        assert_eq!(next.remaining(), "-");
    }
}
