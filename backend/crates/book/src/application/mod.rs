//! Application Layer - Use Cases
//!
//! One use case per operation. Each borrows the injected repository and
//! returns a [`crate::error::BookResult`]; nothing here knows about HTTP.

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

pub use create_book::CreateBookUseCase;
pub use delete_book::DeleteBookUseCase;
pub use get_book::GetBookUseCase;
pub use list_books::ListBooksUseCase;
pub use update_book::UpdateBookUseCase;
