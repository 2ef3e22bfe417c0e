use super::Cursor;
use crate::input::{Input, Source};

/// Source backed by a string
pub type StringSource = Source<str>;

/// Text cursor, measured in UTF-8 bytes
pub type StringInput = Cursor<str>;

impl Input for Cursor<str> {
    type Slice = str;

    fn offset(&self) -> usize {
        self.position()
    }

    fn length(&self) -> usize {
        self.source().value().len().saturating_sub(self.position())
    }

    fn forward(&self, n: usize) -> Self {
        let text = self.source().value();
        let offset = (self.position() + n).min(text.len());
        debug_assert!(
            text.is_char_boundary(offset),
            "forward({}) from {} splits a character",
            n,
            self.position()
        );
        Cursor::at(self.source().clone(), offset)
    }

    fn remaining(&self) -> &str {
        self.source().value().get(self.position()..).unwrap_or_default()
    }

    fn peek(&self, n: usize) -> Option<&str> {
        self.remaining().get(..n)
    }
}

impl From<&str> for StringInput {
    fn from(text: &str) -> Self {
        Cursor::new(StringSource::new(text))
    }
}

impl From<String> for StringInput {
    fn from(text: String) -> Self {
        Cursor::new(StringSource::new(text))
    }
}

impl From<StringSource> for StringInput {
    fn from(source: StringSource) -> Self {
        Cursor::new(source)
    }
}
