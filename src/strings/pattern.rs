use crate::cursors::StringInput;
use crate::error::{Failure, ParseResult};
use crate::input::Input;
use crate::parser::Parser;
use regex::Regex;

/// Parser that matches a regular expression at the start of the remaining input
///
/// The pattern is anchored when it is compiled, so it can only match right
/// where the input begins. Only the remaining text is searched, never the
/// consumed part of the source, and exactly the matched span is consumed.
#[derive(Debug, Clone)]
pub struct Re {
    regex: Regex,
}

impl Re {
    /// Compile `pattern`, prepending a start anchor if it has none
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = if pattern.starts_with('^') {
            pattern.to_string()
        } else {
            format!("^(?:{})", pattern)
        };
        log::debug!("compiling regex terminal {:?}", anchored);
        let regex = Regex::new(&anchored)?;
        Ok(Re { regex })
    }

    /// The anchored pattern actually matched against the input
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Parser for Re {
    type Input = StringInput;
    type Output = String;

    fn parse(&self, input: StringInput) -> ParseResult<StringInput, String> {
        let matched = self
            .regex
            .find(input.remaining())
            .filter(|found| found.start() == 0)
            .map(|found| found.as_str().to_string());

        match matched {
            Some(text) => {
                let next = input.forward(text.len());
                Ok((text, next))
            }
            None => Err(Failure::new(
                format!("No match for regex \"{}\"", self.regex.as_str()),
                input,
            )),
        }
    }
}

/// Convenience function to create a Re parser
pub fn re(pattern: &str) -> Result<Re, regex::Error> {
    Re::new(pattern)
}
