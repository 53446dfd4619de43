//! In-memory repository for tests
//!
//! Same contract as the PostgreSQL repository: ids start at 1 and are never
//! reused, and a failing write changes nothing. `set_failing(true)` makes
//! every call fail with a pool error, to drive the 500 paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entity::{Book, BookDraft};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::BookId;
use crate::error::{BookOperation, BookResult};

#[derive(Default)]
struct Table {
    rows: BTreeMap<BookId, Book>,
    last_id: i32,
}

#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    table: Arc<Mutex<Table>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.lock().rows.len()
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self, operation: BookOperation) -> BookResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(operation.db_error()(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> BookResult<Vec<Book>> {
        self.check(BookOperation::List)?;
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BookId) -> BookResult<Option<Book>> {
        self.check(BookOperation::Get)?;
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn create(&self, draft: &BookDraft) -> BookResult<Book> {
        self.check(BookOperation::Create)?;
        let mut table = self.lock();
        table.last_id += 1;
        let book = draft.clone().into_book(BookId::new(table.last_id));
        table.rows.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: BookId, draft: &BookDraft) -> BookResult<Option<Book>> {
        self.check(BookOperation::Update)?;
        let mut table = self.lock();
        Ok(table.rows.get_mut(&id).map(|slot| {
            *slot = draft.clone().into_book(id);
            slot.clone()
        }))
    }

    async fn delete(&self, id: BookId) -> BookResult<bool> {
        self.check(BookOperation::Delete)?;
        Ok(self.lock().rows.remove(&id).is_some())
    }
}
