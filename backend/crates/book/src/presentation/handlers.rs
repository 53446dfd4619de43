//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::{
    CreateBookUseCase, DeleteBookUseCase, GetBookUseCase, ListBooksUseCase, UpdateBookUseCase,
};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::BookId;
use crate::error::{BookError, BookResult};
use crate::presentation::dto::{BookResponse, MessageResponse};
use crate::presentation::extract::JsonPayload;

/// Shared state for book handlers
#[derive(Clone)]
pub struct BookAppState<R>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// `{id}` segment; anything that is not an `i32` is an unknown book
fn book_id(path: Result<Path<i32>, PathRejection>) -> BookResult<BookId> {
    let Path(id) = path?;
    Ok(BookId::new(id))
}

/// GET /books
pub async fn list_books<R>(
    State(state): State<BookAppState<R>>,
) -> BookResult<Json<Vec<BookResponse>>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListBooksUseCase::new(state.repo.clone());

    let books = use_case.execute().await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/{id}
pub async fn get_book<R>(
    State(state): State<BookAppState<R>>,
    path: Result<Path<i32>, PathRejection>,
) -> BookResult<Json<BookResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let id = book_id(path)?;
    let use_case = GetBookUseCase::new(state.repo.clone());

    let book = use_case.execute(id).await?;

    Ok(Json(book.into()))
}

/// POST /books
pub async fn create_book<R>(
    State(state): State<BookAppState<R>>,
    JsonPayload(payload): JsonPayload,
) -> BookResult<impl IntoResponse>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateBookUseCase::new(state.repo.clone());

    let book = use_case.execute(payload.as_ref()).await?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// PUT /books/{id}
pub async fn update_book<R>(
    State(state): State<BookAppState<R>>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<JsonPayload, BookError>,
) -> BookResult<Json<BookResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let id = book_id(path)?;
    let use_case = UpdateBookUseCase::new(state.repo.clone());

    // Body errors are reported only after the id is known to exist
    let book = use_case
        .execute(id, payload.map(|JsonPayload(value)| value))
        .await?;

    Ok(Json(book.into()))
}

/// DELETE /books/{id}
pub async fn delete_book<R>(
    State(state): State<BookAppState<R>>,
    path: Result<Path<i32>, PathRejection>,
) -> BookResult<Json<MessageResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let id = book_id(path)?;
    let use_case = DeleteBookUseCase::new(state.repo.clone());

    use_case.execute(id).await?;

    Ok(Json(MessageResponse::BOOK_DELETED))
}
