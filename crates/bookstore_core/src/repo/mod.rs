//! Repository layer for the durable catalog store.
//!
//! # Responsibility
//! - Define the store-facing persistence contract.
//! - Isolate SQLite details from service orchestration.
//!
//! # Invariants
//! - Store errors are returned unchanged inside `RepoError::Db`.

pub mod book_repo;
