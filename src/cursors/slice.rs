use super::Cursor;
use crate::input::{Input, Source};

/// Source backed by a slice of tokens
pub type SliceSource<T> = Source<[T]>;

/// Token cursor, measured in elements
pub type SliceInput<T> = Cursor<[T]>;

impl<T> Input for Cursor<[T]> {
    type Slice = [T];

    fn offset(&self) -> usize {
        self.position()
    }

    fn length(&self) -> usize {
        self.source().value().len().saturating_sub(self.position())
    }

    fn forward(&self, n: usize) -> Self {
        let offset = (self.position() + n).min(self.source().value().len());
        Cursor::at(self.source().clone(), offset)
    }

    fn remaining(&self) -> &[T] {
        self.source().value().get(self.position()..).unwrap_or_default()
    }

    fn peek(&self, n: usize) -> Option<&[T]> {
        self.remaining().get(..n)
    }
}

impl<T> From<Vec<T>> for SliceInput<T> {
    fn from(tokens: Vec<T>) -> Self {
        Cursor::new(SliceSource::new(tokens))
    }
}

impl<T: Clone> From<&[T]> for SliceInput<T> {
    fn from(tokens: &[T]) -> Self {
        Cursor::new(SliceSource::new(tokens))
    }
}
