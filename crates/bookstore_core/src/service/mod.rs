//! Book use-case services.
//!
//! # Responsibility
//! - Expose one storage-agnostic CRUD contract to the HTTP layer.
//! - Provide the volatile and durable backends behind it.

pub mod book_service;
pub mod db_service;
pub mod memory_service;
