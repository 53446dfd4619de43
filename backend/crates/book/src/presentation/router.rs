//! Book Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::BookRepository;
use crate::infra::postgres::PgBookRepository;
use crate::presentation::handlers::{self, BookAppState};

/// Create the book router with PostgreSQL repository
pub fn book_router(repo: PgBookRepository) -> Router {
    book_router_generic(repo)
}

/// Create a book router for any repository implementation
pub fn book_router_generic<R>(repo: R) -> Router
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let state = BookAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/books",
            get(handlers::list_books::<R>).post(handlers::create_book::<R>),
        )
        .route(
            "/books/{id}",
            get(handlers::get_book::<R>)
                .put(handlers::update_book::<R>)
                .delete(handlers::delete_book::<R>),
        )
        .with_state(state)
}
