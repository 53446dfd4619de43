//! Book Entity

use chrono::NaiveDate;

use crate::domain::value_object::{AuthorName, BookId, BookTitle};

/// A persisted book record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Store-assigned primary key, immutable
    pub id: BookId,
    pub title: BookTitle,
    pub author: AuthorName,
    pub published_date: NaiveDate,
}

/// The mutable fields of a book, already validated.
///
/// Used for both create and update; an update replaces all three together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: BookTitle,
    pub author: AuthorName,
    pub published_date: NaiveDate,
}

impl BookDraft {
    /// Attach the id the store assigned (or the id being replaced)
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            published_date: self.published_date,
        }
    }
}
