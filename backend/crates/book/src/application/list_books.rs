//! List Books Use Case

use std::sync::Arc;

use crate::domain::entity::Book;
use crate::domain::repository::BookRepository;
use crate::error::BookResult;

pub struct ListBooksUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> ListBooksUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self) -> BookResult<Vec<Book>> {
        self.book_repo.list().await
    }
}
