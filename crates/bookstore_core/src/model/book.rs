//! Book domain model.
//!
//! # Responsibility
//! - Define the single catalog record shared by every storage backend.
//! - Own the update-merge rule applied by `BookService::update`.
//!
//! # Invariants
//! - `id` is unique across live records of one store instance.
//! - `id` never changes after assignment; merges only touch mutable fields.
//! - A record is either absent or fully populated (no tombstones).

use serde::{Deserialize, Serialize};

/// Integer identity of a book record.
///
/// Assigned by the owning service implementation, never by callers.
pub type BookId = i64;

/// Catalog record.
///
/// `id` defaults to `0` when absent from JSON input, which marks an unsaved
/// record. `title`, `author` and `price` must be present; no further
/// validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Semantically non-negative; not enforced.
    pub price: f64,
}

impl Book {
    /// Creates an unsaved record (`id == 0`).
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self::with_id(0, title, author, price)
    }

    /// Creates a record with a caller-provided id.
    ///
    /// Services may still reassign the id on `add`.
    pub fn with_id(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    /// Replaces every mutable field with the values from `source`.
    ///
    /// Full replacement, no partial merge. `self.id` is left untouched even
    /// when `source.id` differs.
    pub fn replace_fields(&mut self, source: &Book) {
        self.title.clone_from(&source.title);
        self.author.clone_from(&source.author);
        self.price = source.price;
    }

    /// Returns whether two records carry the same mutable field values.
    pub fn same_fields(&self, other: &Book) -> bool {
        self.title == other.title && self.author == other.author && self.price == other.price
    }
}
