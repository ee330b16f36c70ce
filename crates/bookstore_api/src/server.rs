//! HTTP server combining the book and health routers.

use axum::http::HeaderValue;
use axum::Router;
use log::{info, warn};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::HttpServerConfig;
use crate::routes::{book_routes, health_routes, SharedBookService};

pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, service: SharedBookService) -> Self {
        let router = build_router(&config, service);
        Self { config, router }
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Consumes the server and returns its router, for in-process tests.
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener).await
    }

    /// Serves on an already-bound listener until Ctrl-C.
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        info!(
            "event=server_start module=api status=ok addr={} base_path={}",
            listener.local_addr()?,
            self.config.normalized_base_path().unwrap_or_default()
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("event=server_stop module=api status=ok");
        Ok(())
    }
}

fn build_router(config: &HttpServerConfig, service: SharedBookService) -> Router {
    let books = book_routes(service);
    let books = match config.normalized_base_path() {
        Some(base) => Router::new().nest(&base, books),
        None => books,
    };

    Router::new()
        .merge(health_routes())
        .merge(books)
        .layer(cors_layer(&config.cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("event=cors_config module=api status=error origin={origin} error_code=invalid_origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=server_signal module=api status=error error={err}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::MemoryBookService;
    use std::sync::Arc;

    #[test]
    fn socket_addr_follows_config() {
        let server = HttpServer::new(
            HttpServerConfig::with_port(8080),
            Arc::new(MemoryBookService::new()),
        );
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn router_builds_with_base_path_and_origins() {
        let config = HttpServerConfig {
            base_path: "/api".to_string(),
            cors_origins: vec!["http://localhost:3000".to_string(), "\n".to_string()],
            ..HttpServerConfig::default()
        };
        let _router = HttpServer::new(config, Arc::new(MemoryBookService::new())).router();
    }
}
