//! Catalog domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every record is identified by an integer `BookId`.
//! - Deletion removes a record entirely; there is no soft-delete state.

pub mod book;
