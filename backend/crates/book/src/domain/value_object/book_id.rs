//! Book ID Value Object
//!
//! Store-assigned integer key. Never chosen by clients, never reused.

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct BookId(i32);

impl BookId {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for BookId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<BookId> for i32 {
    fn from(id: BookId) -> Self {
        id.0
    }
}
