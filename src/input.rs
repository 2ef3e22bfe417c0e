use std::fmt;
use std::sync::Arc;

/// Immutable holder of the value being parsed
///
/// Cloning a `Source` only bumps a reference count, so any number of cursors
/// can point into the same backing value without copying it.
pub struct Source<T: ?Sized> {
    value: Arc<T>,
}

impl<T: ?Sized> Source<T> {
    pub fn new(value: impl Into<Arc<T>>) -> Self {
        Source {
            value: value.into(),
        }
    }

    /// The raw backing value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if both sources share the same allocation
    pub fn same_as(&self, other: &Source<T>) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl<T: ?Sized> Clone for Source<T> {
    fn clone(&self) -> Self {
        Source {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Source").field(&&*self.value).finish()
    }
}

/// Position-indexed, immutable view over a [`Source`]
///
/// An input never changes once created. Advancing produces a new input, so
/// backtracking is just reusing an older one. This abstraction lets every
/// combinator work the same way over text, token slices, or anything else that
/// can be measured in units from a start offset.
pub trait Input: Clone {
    /// The unit sequence this input is measured in, e.g. `str` or `[T]`
    type Slice: ?Sized;

    /// Position of this cursor in the backing source
    fn offset(&self) -> usize;

    /// Number of units left to consume
    fn length(&self) -> usize;

    /// A new input `n` units further along
    ///
    /// Callers must not move past the end; the result saturates there.
    fn forward(&self, n: usize) -> Self;

    /// Everything not consumed yet
    fn remaining(&self) -> &Self::Slice;

    /// The next `n` units without advancing, or `None` if they are not available
    fn peek(&self, n: usize) -> Option<&Self::Slice>;

    /// Check if nothing is left to consume
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Render a message with this input's offset as `"<message> at <offset>"`
    fn full_error_message(&self, message: &str) -> String {
        format!("{} at {}", message, self.offset())
    }
}
