//! Delete Book Use Case

use std::sync::Arc;

use crate::domain::repository::BookRepository;
use crate::domain::value_object::BookId;
use crate::error::{BookError, BookResult};

pub struct DeleteBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> DeleteBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, id: BookId) -> BookResult<()> {
        if !self.book_repo.delete(id).await? {
            return Err(BookError::NotFound);
        }

        tracing::info!(book_id = %id, "Book deleted");

        Ok(())
    }
}
