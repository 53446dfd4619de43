//! Get Book Use Case

use std::sync::Arc;

use crate::domain::entity::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_object::BookId;
use crate::error::{BookError, BookResult};

pub struct GetBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> GetBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, id: BookId) -> BookResult<Book> {
        self.book_repo
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound)
    }
}
