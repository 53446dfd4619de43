//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire; `published_date` is `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entity::Book;

/// A book as returned by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            title: book.title.into_inner(),
            author: book.author.into_inner(),
            published_date: book.published_date,
        }
    }
}

/// Response for DELETE /books/{id}
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const BOOK_DELETED: Self = Self {
        message: "Book deleted successfully",
    };
}
