//! Command-line definitions.
//!
//! Commands:
//! - bookstore serve [--config <path>] [overrides...]
//! - bookstore books [--base-url <url>] list|get|add|update|delete

use bookstore_api::{AppConfig, StorageBackend};
use bookstore_core::BookId;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5080";

/// Bookstore catalog service and client
#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Talk to a running server
    Books {
        /// Server base URL, including any base path
        #[arg(long, env = "BOOKSTORE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        #[command(subcommand)]
        action: BookAction,
    },
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Mount prefix for the books resource, e.g. /api
    #[arg(long)]
    pub base_path: Option<String>,

    #[arg(long, value_enum)]
    pub storage: Option<StorageArg>,

    /// SQLite file (sqlite storage only)
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; stderr when omitted
    #[arg(long)]
    pub log_dir: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArg {
    Memory,
    Sqlite,
}

impl From<StorageArg> for StorageBackend {
    fn from(value: StorageArg) -> Self {
        match value {
            StorageArg::Memory => Self::Memory,
            StorageArg::Sqlite => Self::Sqlite,
        }
    }
}

impl ServeArgs {
    /// Applies command-line overrides on top of file/default configuration.
    ///
    /// Passing `--db-path` alone implies the sqlite backend.
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(base_path) = &self.base_path {
            config.server.base_path.clone_from(base_path);
        }
        if let Some(db_path) = &self.db_path {
            config.storage.db_path = Some(db_path.clone());
            config.storage.backend = StorageBackend::Sqlite;
        }
        if let Some(storage) = self.storage {
            config.storage.backend = storage.into();
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(log_dir) = &self.log_dir {
            config.logging.log_dir = Some(log_dir.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum BookAction {
    /// List every book
    List,
    /// Show one book
    Get { id: BookId },
    /// Create a book
    Add(BookFields),
    /// Replace every field of a book
    Update {
        id: BookId,
        #[command(flatten)]
        fields: BookFields,
    },
    /// Remove a book
    Delete { id: BookId },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct BookFields {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: String,
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_update_with_all_fields() {
        let cli = Cli::parse_from([
            "bookstore", "books", "--base-url", "http://h:1/api", "update", "3", "--title",
            "Dune", "--author", "Herbert", "--price", "9.5",
        ]);
        match cli.command {
            Command::Books { base_url, action } => {
                assert_eq!(base_url, "http://h:1/api");
                assert_eq!(
                    action,
                    BookAction::Update {
                        id: 3,
                        fields: BookFields {
                            title: "Dune".to_string(),
                            author: "Herbert".to_string(),
                            price: 9.5,
                        },
                    }
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn add_requires_every_field() {
        let result = Cli::try_parse_from(["bookstore", "books", "add", "--title", "Dune"]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_overrides_replace_config_values() {
        let args = ServeArgs {
            port: Some(9000),
            db_path: Some(PathBuf::from("/tmp/books.db")),
            log_level: Some("warn".to_string()),
            ..ServeArgs::default()
        };

        let config = args.apply_to(AppConfig::default());

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.db_path, Some(PathBuf::from("/tmp/books.db")));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn explicit_storage_wins_over_db_path_implication() {
        let args = ServeArgs {
            db_path: Some(PathBuf::from("/tmp/books.db")),
            storage: Some(StorageArg::Memory),
            ..ServeArgs::default()
        };

        let config = args.apply_to(AppConfig::default());

        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }
}
