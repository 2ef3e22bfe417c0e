pub mod cursor;
pub mod slice;
pub mod string;

pub use cursor::Cursor;
pub use slice::{SliceInput, SliceSource};
pub use string::{StringInput, StringSource};
