//! Book HTTP routes.
//!
//! `/books` and `/books/:id` map one-to-one onto `BookService` calls. The
//! path id is authoritative for PUT; any id in the body is overwritten.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bookstore_core::{core_version, Book, BookId, BookService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;

/// Service handle shared by every handler.
pub type SharedBookService = Arc<dyn BookService>;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn book_routes(service: SharedBookService) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(service)
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: core_version().to_string(),
    })
}

async fn list_books_handler(
    State(service): State<SharedBookService>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(service.list().await?))
}

async fn get_book_handler(
    State(service): State<SharedBookService>,
    Path(id): Path<BookId>,
) -> Result<Json<Book>, ApiError> {
    service
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

async fn create_book_handler(
    State(service): State<SharedBookService>,
    Json(book): Json<Book>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let stored = service.add(book).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn update_book_handler(
    State(service): State<SharedBookService>,
    Path(id): Path<BookId>,
    Json(mut book): Json<Book>,
) -> Result<StatusCode, ApiError> {
    book.id = id;
    service.update(book).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_book_handler(
    State(service): State<SharedBookService>,
    Path(id): Path<BookId>,
) -> Result<StatusCode, ApiError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
