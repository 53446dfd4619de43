//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{Book, BookDraft};
use crate::domain::value_object::BookId;
use crate::error::BookResult;

/// Book repository trait
///
/// Writes are atomic: when one of them returns an error the store is left
/// exactly as it was before the call.
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// All books, in insertion (id) order
    async fn list(&self) -> BookResult<Vec<Book>>;

    /// Find a book by ID; absence is not an error
    async fn find_by_id(&self, id: BookId) -> BookResult<Option<Book>>;

    /// Insert a new book and return it with its assigned ID
    async fn create(&self, draft: &BookDraft) -> BookResult<Book>;

    /// Replace all mutable fields; `None` if the ID does not exist
    async fn update(&self, id: BookId, draft: &BookDraft) -> BookResult<Option<Book>>;

    /// Delete a book; `false` if the ID does not exist
    async fn delete(&self, id: BookId) -> BookResult<bool>;
}
