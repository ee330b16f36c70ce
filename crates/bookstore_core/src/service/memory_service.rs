//! Volatile book service backed by a process-lifetime `Vec`.
//!
//! # Invariants
//! - Records keep insertion order; `delete` preserves the order of the rest.
//! - `add` assigns `id = len + 1`, ignoring the input id.
//! - Lookups scan linearly and the first match wins.
//!
//! The `len + 1` rule only yields unique ids while nothing has been deleted.
//! After a delete, a new record can receive the id of a surviving one. This
//! is kept as observable behavior; see `tests/memory_service.rs`.
//!
//! The collection sits behind one `RwLock`, so concurrent calls cannot lose
//! updates or race on the count.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::RepoResult;
use crate::service::book_service::BookService;
use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryBookService {
    books: RwLock<Vec<Book>>,
}

impl MemoryBookService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookService for MemoryBookService {
    async fn list(&self) -> RepoResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn get(&self, id: BookId) -> RepoResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|book| book.id == id).cloned())
    }

    async fn add(&self, mut book: Book) -> RepoResult<Book> {
        let mut books = self.books.write().await;
        book.id = books.len() as BookId + 1;
        books.push(book.clone());
        debug!(
            "event=book_add module=memory status=ok book_id={} count={}",
            book.id,
            books.len()
        );
        Ok(book)
    }

    async fn update(&self, book: Book) -> RepoResult<()> {
        let mut books = self.books.write().await;
        if let Some(existing) = books.iter_mut().find(|existing| existing.id == book.id) {
            existing.replace_fields(&book);
        }
        Ok(())
    }

    async fn delete(&self, id: BookId) -> RepoResult<()> {
        let mut books = self.books.write().await;
        if let Some(index) = books.iter().position(|book| book.id == id) {
            books.remove(index);
        }
        Ok(())
    }
}
