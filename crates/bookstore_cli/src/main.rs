//! Bookstore entry point.
//!
//! `serve` wires the configured `BookService` into the HTTP server;
//! `books` is the presentation client for a running server.

mod args;
mod client;
mod render;

use anyhow::Context;
use args::{BookAction, Cli, Command, ServeArgs};
use bookstore_api::{build_book_service, AppConfig, HttpServer};
use bookstore_core::{init_logging, init_stderr_logging, Book};
use clap::Parser;
use client::BooksClient;
use log::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Books { base_url, action } => run_client(&base_url, action).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let file_config = match &args.config {
        Some(path) => AppConfig::from_json_file(path)?,
        None => AppConfig::default(),
    };
    let config = args.apply_to(file_config);

    let logging = match &config.logging.log_dir {
        Some(dir) => init_logging(&config.logging.level, dir),
        None => init_stderr_logging(&config.logging.level),
    };
    logging
        .map_err(anyhow::Error::msg)
        .context("logging setup failed")?;

    let service = build_book_service(&config.storage).context("storage setup failed")?;
    info!(
        "event=serve module=cli status=start addr={}",
        config.server.socket_addr()
    );
    HttpServer::new(config.server, service)
        .start()
        .await
        .context("server stopped with an error")
}

async fn run_client(base_url: &str, action: BookAction) -> anyhow::Result<()> {
    let client = BooksClient::new(base_url)?;
    let output = match action {
        BookAction::List => render::render_list(&client.list().await?),
        BookAction::Get { id } => render::render_detail(&client.get(id).await?),
        BookAction::Add(fields) => {
            let book = Book::new(fields.title, fields.author, fields.price);
            render::render_detail(&client.add(&book).await?)
        }
        BookAction::Update { id, fields } => {
            let book = Book::with_id(id, fields.title, fields.author, fields.price);
            client.update(&book).await?;
            format!("Updated book {id}.\n")
        }
        BookAction::Delete { id } => {
            client.delete(id).await?;
            format!("Deleted book {id}.\n")
        }
    };
    print!("{output}");
    Ok(())
}
