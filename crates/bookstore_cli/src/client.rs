//! Thin HTTP client for the `books` resource.
//!
//! Any non-success status is reported as a generic failure carrying only the
//! status code; error bodies are not parsed.

use bookstore_core::{Book, BookId};
use reqwest::{Client as HttpClient, Response, StatusCode};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with status {}", .0.as_u16())]
    Status(StatusCode),
}

pub struct BooksClient {
    http_client: HttpClient,
    base_url: String,
}

impl BooksClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: BookId) -> String {
        format!("{}/books/{id}", self.base_url)
    }

    pub async fn list(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.http_client.get(self.books_url()).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    pub async fn get(&self, id: BookId) -> Result<Book, ClientError> {
        let response = self.http_client.get(self.book_url(id)).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    pub async fn add(&self, book: &Book) -> Result<Book, ClientError> {
        let response = self
            .http_client
            .post(self.books_url())
            .json(book)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    pub async fn update(&self, book: &Book) -> Result<(), ClientError> {
        let response = self
            .http_client
            .put(self.book_url(book.id))
            .json(book)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    pub async fn delete(&self, id: BookId) -> Result<(), ClientError> {
        let response = self.http_client.delete(self.book_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::{BooksClient, ClientError};
    use bookstore_api::{build_book_service, HttpServer, HttpServerConfig, StorageConfig};
    use bookstore_core::Book;
    use reqwest::StatusCode;
    use tokio::net::TcpListener;

    async fn spawn_server(base_path: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let config = HttpServerConfig {
            base_path: base_path.to_string(),
            ..HttpServerConfig::default()
        };
        let service = build_book_service(&StorageConfig::default()).unwrap();
        tokio::spawn(HttpServer::new(config, service).serve(listener));
        format!("http://{addr}{base_path}")
    }

    #[test]
    fn urls_drop_trailing_slash() {
        let client = BooksClient::new("http://localhost:5080/api/").unwrap();
        assert_eq!(client.books_url(), "http://localhost:5080/api/books");
        assert_eq!(client.book_url(7), "http://localhost:5080/api/books/7");
    }

    #[test]
    fn status_errors_are_generic() {
        let err = ClientError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "request failed with status 404");
    }

    #[tokio::test]
    async fn issues_all_five_calls_against_a_live_server() {
        let client = BooksClient::new(spawn_server("/api").await).unwrap();

        let created = client.add(&Book::new("Dune", "Herbert", 9.99)).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(client.list().await.unwrap(), [created.clone()]);

        let edited = Book::with_id(created.id, "Dune: New Edition", "Herbert", 9.99);
        client.update(&edited).await.unwrap();
        assert_eq!(client.get(created.id).await.unwrap(), edited);

        client.delete(created.id).await.unwrap();
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_book_is_a_generic_status_error() {
        let client = BooksClient::new(spawn_server("").await).unwrap();

        let err = client.get(99).await.unwrap_err();

        assert!(matches!(err, ClientError::Status(StatusCode::NOT_FOUND)));
    }
}
