//! Create Book Use Case
//!
//! Validates the raw payload and inserts the book. Nothing is written when
//! validation fails.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::entity::Book;
use crate::domain::repository::BookRepository;
use crate::domain::validation::{is_falsy, validate_book_payload};
use crate::error::{BookError, BookResult};

pub struct CreateBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> CreateBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    /// `payload` is `None` when the request carried no JSON at all
    pub async fn execute(&self, payload: Option<&Value>) -> BookResult<Book> {
        let payload = payload
            .filter(|value| !is_falsy(value))
            .ok_or(BookError::MissingPayload)?;

        let draft = validate_book_payload(payload)?;
        let book = self.book_repo.create(&draft).await?;

        tracing::info!(
            book_id = %book.id,
            title = %book.title,
            "Book created"
        );

        Ok(book)
    }
}
