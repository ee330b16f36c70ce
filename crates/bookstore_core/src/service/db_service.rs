//! Durable book service delegating to a `BookRepository`.
//!
//! # Invariants
//! - Identity is assigned by the store, never by this layer.
//! - No retry, caching or validation is layered over the repository.
//! - Repository errors are returned unchanged.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::{BookRepository, RepoResult};
use crate::service::book_service::BookService;
use async_trait::async_trait;

pub struct DbBookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> DbBookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: BookRepository> BookService for DbBookService<R> {
    async fn list(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_books().await
    }

    async fn get(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id).await
    }

    async fn add(&self, mut book: Book) -> RepoResult<Book> {
        book.id = self.repo.add_book(&book).await?;
        Ok(book)
    }

    /// Store semantics apply: a missing row surfaces as `RepoError::NotFound`.
    async fn update(&self, book: Book) -> RepoResult<()> {
        self.repo.update_book(&book).await
    }

    async fn delete(&self, id: BookId) -> RepoResult<()> {
        if self.repo.get_book(id).await?.is_some() {
            self.repo.delete_book(id).await?;
        }
        Ok(())
    }
}
