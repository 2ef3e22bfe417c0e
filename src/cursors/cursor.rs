use crate::input::Source;
use std::fmt;

/// A concrete input: a shared source plus the offset of the next unit to read
///
/// The source is generic over its backing slice so the same cursor serves
/// text (`Cursor<str>`) and token streams (`Cursor<[T]>`). See the
/// [`Input`](crate::input::Input) impls in the sibling modules.
pub struct Cursor<T: ?Sized> {
    source: Source<T>,
    offset: usize,
}

impl<T: ?Sized> Cursor<T> {
    /// Create a cursor positioned at the start of `source`
    pub fn new(source: Source<T>) -> Self {
        Cursor { source, offset: 0 }
    }

    pub(crate) fn at(source: Source<T>, offset: usize) -> Self {
        Cursor { source, offset }
    }

    pub fn source(&self) -> &Source<T> {
        &self.source
    }

    pub(crate) fn position(&self) -> usize {
        self.offset
    }
}

impl<T: ?Sized> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Cursor {
            source: self.source.clone(),
            offset: self.offset,
        }
    }
}

impl<T: ?Sized> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.source.same_as(&other.source)
    }
}

impl<T: ?Sized> Eq for Cursor<T> {}

impl<T: ?Sized> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The source can be large, the offset is what identifies a cursor
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
