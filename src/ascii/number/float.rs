use crate::cursors::StringInput;
use crate::error::Failure;
use crate::fail::fail;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::strings::Re;
use crate::try_map::TryMapExt;
use once_cell::sync::Lazy;

static FLOAT: Lazy<Re> = Lazy::new(|| {
    Re::new(r"[+-]?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?").expect("float pattern is valid")
});

/// Parser that matches a decimal number with an optional fraction and returns it as text
///
/// No exponent, and at least one digit is required on each side of the point.
pub fn float_str() -> impl Parser<Input = StringInput, Output = String> + Send + Sync {
    Re::clone(&FLOAT).or(fail("Number expected"))
}

/// Parser that matches a decimal number with an optional fraction and returns its value
pub fn float() -> impl Parser<Input = StringInput, Output = f64> + Send + Sync {
    float_str().try_map(|text, next| match text.parse::<f64>() {
        Ok(value) => Ok((value, next)),
        Err(_) => Err(Failure::new("Number expected", next)),
    })
}
