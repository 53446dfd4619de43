//! Update Book Use Case
//!
//! Full replacement of title, author and published date. The id is checked
//! before the payload, so an unknown id is a 404 even with a bad body.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::entity::Book;
use crate::domain::repository::BookRepository;
use crate::domain::validation::{is_falsy, validate_book_payload};
use crate::domain::value_object::BookId;
use crate::error::{BookError, BookOperation, BookResult};

pub struct UpdateBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> UpdateBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    /// `payload` is the decoded body: `Ok(None)` when no JSON was sent, `Err`
    /// when the body could not be decoded. Either only matters once the id
    /// is known to exist.
    pub async fn execute(
        &self,
        id: BookId,
        payload: BookResult<Option<Value>>,
    ) -> BookResult<Book> {
        let existing = self
            .book_repo
            .find_by_id(id)
            .await
            .map_err(|e| e.during(BookOperation::Update))?;

        if existing.is_none() {
            return Err(BookError::NotFound);
        }

        let payload = payload?
            .filter(|value| !is_falsy(value))
            .ok_or(BookError::MissingPayload)?;

        let draft = validate_book_payload(&payload)?;

        // Deleted between the lookup and the write
        let book = self
            .book_repo
            .update(id, &draft)
            .await?
            .ok_or(BookError::NotFound)?;

        tracing::info!(book_id = %book.id, "Book updated");

        Ok(book)
    }
}
