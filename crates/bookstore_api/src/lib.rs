//! HTTP surface for the bookstore catalog.
//!
//! # Responsibility
//! - Map REST verbs on `books` onto `BookService` calls.
//! - Choose the service backend from configuration at process start.
//!
//! # Invariants
//! - Handlers never touch storage directly; everything goes through the
//!   selected `BookService`.
//! - Store failures become 500, store-reported not-found becomes 404.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use bookstore_core::db::{open_db, open_db_in_memory, DbResult};
use bookstore_core::{DbBookService, MemoryBookService, SqliteBookRepository};
use log::info;
use std::sync::Arc;

pub use config::{AppConfig, ConfigError, HttpServerConfig, StorageBackend, StorageConfig};
pub use error::{ApiError, ErrorResponse};
pub use routes::SharedBookService;
pub use server::HttpServer;

/// Builds the service backend named by `storage`.
///
/// The returned handle is the single owner of catalog state for the process.
pub fn build_book_service(storage: &StorageConfig) -> DbResult<SharedBookService> {
    let service: SharedBookService = match storage.backend {
        StorageBackend::Memory => Arc::new(MemoryBookService::new()),
        StorageBackend::Sqlite => {
            let conn = match &storage.db_path {
                Some(path) => open_db(path)?,
                None => open_db_in_memory()?,
            };
            Arc::new(DbBookService::new(SqliteBookRepository::new(conn)))
        }
    };

    info!(
        "event=service_wired module=api status=ok backend={:?} persistent={}",
        storage.backend,
        storage.db_path.is_some()
    );
    Ok(service)
}
