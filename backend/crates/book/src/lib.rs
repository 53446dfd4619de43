//! Book Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Book entity, value objects, payload validation, repository trait
//! - `application/` - Use cases (list, get, create, update, delete)
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Consistency Model
//! - Every write runs in its own transaction; a failure leaves the table untouched
//! - Payloads are validated before any write is attempted
//! - Concurrent writes to one book rely on the database's isolation (last writer wins)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{BookError, BookOperation, BookResult};
pub use infra::postgres::PgBookRepository;
pub use presentation::router::{book_router, book_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
    response::ErrorBody,
};
