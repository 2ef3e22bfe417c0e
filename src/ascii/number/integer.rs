use crate::cursors::StringInput;
use crate::error::Failure;
use crate::fail::fail;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::strings::Re;
use crate::try_map::TryMapExt;
use once_cell::sync::Lazy;

static INTEGER: Lazy<Re> =
    Lazy::new(|| Re::new(r"[+-]?(?:0|[1-9][0-9]*)").expect("integer pattern is valid"));

/// Parser that matches an optionally signed decimal integer and returns it as text
///
/// A leading zero is only allowed for zero itself: `"0123"` matches `"0"`.
pub fn integer_str() -> impl Parser<Input = StringInput, Output = String> + Send + Sync {
    Re::clone(&INTEGER).or(fail("Integer expected"))
}

/// Parser that matches an optionally signed decimal integer and returns its value
///
/// Fails with "Integer out of range" after the digits if they do not fit an `i64`.
pub fn integer() -> impl Parser<Input = StringInput, Output = i64> + Send + Sync {
    integer_str().try_map(|text, next| match text.parse::<i64>() {
        Ok(value) => Ok((value, next)),
        Err(_) => Err(Failure::new("Integer out of range", next)),
    })
}
