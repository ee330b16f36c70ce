//! Business-facing book service contract.
//!
//! # Responsibility
//! - Define the five catalog operations shared by every backend.
//! - Let process wiring choose a backend as `Arc<dyn BookService>`.
//!
//! # Invariants
//! - `get` reports a missing id as `Ok(None)`, never as an error.
//! - `delete` on a missing id is a no-op.
//! - `update` replaces `title`/`author`/`price` and never changes `id`.
//! - Store failures are returned unchanged.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::RepoResult;
use async_trait::async_trait;

#[async_trait]
pub trait BookService: Send + Sync {
    /// Returns every known record.
    ///
    /// Order is stable while the backing collection is not mutated.
    async fn list(&self) -> RepoResult<Vec<Book>>;

    /// Returns the record with `id`, or `None`.
    async fn get(&self, id: BookId) -> RepoResult<Option<Book>>;

    /// Persists a new record and returns it as stored.
    ///
    /// The stored id is chosen by the implementation; the input id is not
    /// trusted.
    async fn add(&self, book: Book) -> RepoResult<Book>;

    /// Replaces the mutable fields of the record matching `book.id`.
    async fn update(&self, book: Book) -> RepoResult<()>;

    /// Removes the record with `id` if present.
    async fn delete(&self, id: BookId) -> RepoResult<()>;
}
