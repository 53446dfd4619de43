//! PostgreSQL Repository Implementation
//!
//! Writes run inside a transaction. Returning early with `?` drops the
//! transaction, and sqlx rolls back a transaction that is dropped without
//! `commit`, so a failed write never leaves a partial change behind.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::entity::{Book, BookDraft};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::{AuthorName, BookId, BookTitle};
use crate::error::{BookOperation, BookResult};

/// PostgreSQL-backed book repository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BookRepository for PgBookRepository {
    async fn list(&self) -> BookResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, published_date
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(BookOperation::List.db_error())?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }

    async fn find_by_id(&self, id: BookId) -> BookResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, published_date
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(BookOperation::Get.db_error())?;

        Ok(row.map(BookRow::into_book))
    }

    async fn create(&self, draft: &BookDraft) -> BookResult<Book> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(BookOperation::Create.db_error())?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (title, author, published_date)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, published_date
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.author.as_str())
        .bind(draft.published_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(BookOperation::Create.db_error())?;

        tx.commit()
            .await
            .map_err(BookOperation::Create.db_error())?;

        Ok(row.into_book())
    }

    async fn update(&self, id: BookId, draft: &BookDraft) -> BookResult<Option<Book>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(BookOperation::Update.db_error())?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                title = $2,
                author = $3,
                published_date = $4
            WHERE id = $1
            RETURNING id, title, author, published_date
            "#,
        )
        .bind(id.value())
        .bind(draft.title.as_str())
        .bind(draft.author.as_str())
        .bind(draft.published_date)
        .fetch_optional(&mut *tx)
        .await
        .map_err(BookOperation::Update.db_error())?;

        tx.commit()
            .await
            .map_err(BookOperation::Update.db_error())?;

        Ok(row.map(BookRow::into_book))
    }

    async fn delete(&self, id: BookId) -> BookResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(BookOperation::Delete.db_error())?;

        let deleted = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(BookOperation::Delete.db_error())?
            .rows_affected();

        tx.commit()
            .await
            .map_err(BookOperation::Delete.db_error())?;

        Ok(deleted > 0)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct BookRow {
    id: i32,
    title: String,
    author: String,
    published_date: NaiveDate,
}

impl BookRow {
    fn into_book(self) -> Book {
        Book {
            id: BookId::new(self.id),
            title: BookTitle::from_db(self.title),
            author: AuthorName::from_db(self.author),
            published_date: self.published_date,
        }
    }
}
