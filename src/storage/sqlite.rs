use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, TransactionBehavior, params};

use super::CatalogStore;
use super::seed::seed_books;
use crate::{
    error::{CatalogError, Result},
    model::Book,
    validation,
};

const BOOK_SELECT_SQL: &str = "SELECT ID, Title FROM books";

const CREATE_TABLE_SQL: &str =
    "CREATE TABLE IF NOT EXISTS books (ID INTEGER PRIMARY KEY, Title TEXT NOT NULL);";

/// Catalog backed by a `books` table in a SQLite file.
///
/// Only `ID` and `Title` are stored, so books read back carry an empty
/// author and no descriptions. No connection is held between calls.
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    path: PathBuf,
}

impl SqliteCatalog {
    /// Use an existing database file. The file is not created here.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CatalogError::Config(format!(
                "Database file not found: {} (run 'bookql init-db' to create it)",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Create the database file and `books` table if missing. With `seed`,
    /// an empty table is filled with the seed titles.
    pub fn initialize(path: impl AsRef<Path>, seed: bool) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), seed, "Initializing book database");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut conn = Connection::open(path)?;
        conn.execute_batch(CREATE_TABLE_SQL)?;

        if seed {
            let tx = conn.transaction()?;
            let count: i64 = tx.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
            if count == 0 {
                for book in seed_books() {
                    tx.execute(
                        "INSERT INTO books (ID, Title) VALUES (?1, ?2)",
                        params![book.id, book.title],
                    )?;
                }
            }
            tx.commit()?;
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }
}

fn row_to_book(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book::new(row.get(0)?, row.get::<_, String>(1)?))
}

impl CatalogStore for SqliteCatalog {
    fn list(&self) -> Result<Vec<Book>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL} ORDER BY ID"))?;
        let rows = stmt.query_map([], row_to_book)?;
        let books = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!(count = books.len(), "Listed books from database");
        Ok(books)
    }

    fn get(&self, id: i32) -> Result<Option<Book>> {
        tracing::debug!(id, "Looking up book in database");
        let conn = self.connect()?;
        let book = conn
            .query_row(
                &format!("{BOOK_SELECT_SQL} WHERE ID = ?1"),
                params![id],
                row_to_book,
            )
            .optional()?;
        Ok(book)
    }

    fn create(&self, title: &str) -> Result<Book> {
        validation::validate_title(title)?;

        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let count: i32 = tx.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        let book = Book::new(count + 1, title);

        // Tables that predate `init-db` have no primary key on ID, so a gap in
        // the existing ids would otherwise produce a duplicate row.
        let taken = tx
            .query_row("SELECT 1 FROM books WHERE ID = ?1", params![book.id], |_| Ok(()))
            .optional()?
            .is_some();
        if taken {
            tracing::warn!(id = book.id, "Next book ID already present in database");
            return Err(CatalogError::Conflict(book.id));
        }

        tx.execute(
            "INSERT INTO books (ID, Title) VALUES (?1, ?2)",
            params![book.id, book.title],
        )?;
        tx.commit()?;

        tracing::info!(id = book.id, title = %book.title, "Created book in database");
        Ok(book)
    }
}
