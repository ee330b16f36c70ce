//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Be the only component that speaks SQL to the catalog store.
//! - Own transaction boundaries around every write.
//!
//! # Invariants
//! - Each write commits before returning; nothing is batched across calls.
//! - The store assigns primary keys; ids on insert input are ignored.
//! - `update_book` on a missing row reports `RepoError::NotFound`.
//! - `delete_book` on a missing row is a no-op.

use crate::db::DbError;
use crate::model::book::{Book, BookId};
use async_trait::async_trait;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

const BOOK_SELECT_SQL: &str = "SELECT id, title, author, price FROM books";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error surfaced by book persistence.
///
/// Store failures are carried verbatim; no business context is added.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(BookId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "book not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store-facing CRUD contract.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Fetches every row, ordered by ascending id.
    async fn list_books(&self) -> RepoResult<Vec<Book>>;
    /// Point lookup by primary key.
    async fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    /// Inserts a row and returns the store-assigned id.
    async fn add_book(&self, book: &Book) -> RepoResult<BookId>;
    /// Replaces the mutable columns of the row keyed by `book.id`.
    async fn update_book(&self, book: &Book) -> RepoResult<()>;
    /// Removes the row if present.
    async fn delete_book(&self, id: BookId) -> RepoResult<()>;
}

#[async_trait]
impl<T: BookRepository + ?Sized> BookRepository for Arc<T> {
    async fn list_books(&self) -> RepoResult<Vec<Book>> {
        (**self).list_books().await
    }

    async fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        (**self).get_book(id).await
    }

    async fn add_book(&self, book: &Book) -> RepoResult<BookId> {
        (**self).add_book(book).await
    }

    async fn update_book(&self, book: &Book) -> RepoResult<()> {
        (**self).update_book(book).await
    }

    async fn delete_book(&self, id: BookId) -> RepoResult<()> {
        (**self).delete_book(id).await
    }
}

/// SQLite-backed book repository.
///
/// Cloning shares the same underlying connection.
#[derive(Clone)]
pub struct SqliteBookRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteBookRepository {
    /// Wraps a connection returned by `db::open_db` or `db::open_db_in_memory`.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn list_books(&self) -> RepoResult<Vec<Book>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;
        let books = stmt
            .query_map([], parse_book_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    async fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let conn = self.conn.lock().await;
        Ok(find_book(&conn, id)?)
    }

    async fn add_book(&self, book: &Book) -> RepoResult<BookId> {
        let started_at = Instant::now();
        let mut conn = self.conn.lock().await;

        let result = insert_book(&mut conn, book);
        log_write("book_add", started_at, result.as_ref().ok().copied(), &result);
        Ok(result?)
    }

    async fn update_book(&self, book: &Book) -> RepoResult<()> {
        let started_at = Instant::now();
        let mut conn = self.conn.lock().await;

        let result = replace_book(&mut conn, book);
        log_write("book_update", started_at, Some(book.id), &result);
        if result? == 0 {
            return Err(RepoError::NotFound(book.id));
        }
        Ok(())
    }

    async fn delete_book(&self, id: BookId) -> RepoResult<()> {
        let started_at = Instant::now();
        let mut conn = self.conn.lock().await;

        let result = remove_book(&mut conn, id);
        log_write("book_delete", started_at, Some(id), &result);
        result?;
        Ok(())
    }
}

fn insert_book(conn: &mut Connection, book: &Book) -> rusqlite::Result<BookId> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO books (title, author, price) VALUES (?1, ?2, ?3);",
        params![book.title, book.author, book.price],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;
    Ok(id)
}

fn replace_book(conn: &mut Connection, book: &Book) -> rusqlite::Result<usize> {
    let tx = conn.transaction()?;
    let changed = tx.execute(
        "UPDATE books SET title = ?1, author = ?2, price = ?3 WHERE id = ?4;",
        params![book.title, book.author, book.price, book.id],
    )?;
    tx.commit()?;
    Ok(changed)
}

/// Returns whether a row was removed.
fn remove_book(conn: &mut Connection, id: BookId) -> rusqlite::Result<bool> {
    let tx = conn.transaction()?;
    if find_book(&tx, id)?.is_none() {
        return Ok(false);
    }
    tx.execute("DELETE FROM books WHERE id = ?1;", [id])?;
    tx.commit()?;
    Ok(true)
}

fn find_book(conn: &Connection, id: BookId) -> rusqlite::Result<Option<Book>> {
    conn.query_row(
        &format!("{BOOK_SELECT_SQL} WHERE id = ?1;"),
        [id],
        parse_book_row,
    )
    .optional()
}

fn parse_book_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get("id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        price: row.get("price")?,
    })
}

fn log_write<T>(
    event: &str,
    started_at: Instant,
    id: Option<BookId>,
    result: &rusqlite::Result<T>,
) {
    let duration_ms = started_at.elapsed().as_millis();
    let id = id.map_or_else(|| "none".to_string(), |id| id.to_string());
    match result {
        Ok(_) => info!("event={event} module=repo status=ok book_id={id} duration_ms={duration_ms}"),
        Err(err) => error!(
            "event={event} module=repo status=error book_id={id} duration_ms={duration_ms} error={err}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{BookRepository, SqliteBookRepository};
    use crate::db::open_db_in_memory;
    use crate::model::book::Book;

    fn repo() -> SqliteBookRepository {
        SqliteBookRepository::new(open_db_in_memory().expect("in-memory db should open"))
    }

    #[tokio::test]
    async fn add_ignores_input_id() {
        let repo = repo();
        let id = repo
            .add_book(&Book::with_id(42, "Dune", "Herbert", 9.99))
            .await
            .expect("insert should succeed");
        assert_eq!(id, 1);
        assert!(repo.get_book(42).await.expect("lookup").is_none());
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let repo = repo();
        let other = repo.clone();
        repo.add_book(&Book::new("Emma", "Austen", 4.5))
            .await
            .expect("insert should succeed");
        assert_eq!(other.list_books().await.expect("list").len(), 1);
    }
}
