//! Catalog storage.
//!
//! Resolvers only see the [`CatalogStore`] trait. Two backings exist and a
//! run uses exactly one of them, chosen by [`open_catalog`]:
//!
//! - [`MemoryCatalog`]: a process-lifetime vector, optionally seeded
//! - [`SqliteCatalog`]: a single `books (ID, Title)` table, one connection per call
//!
//! ## Table Layout
//!
//! ```sql
//! CREATE TABLE books (ID INTEGER PRIMARY KEY, Title TEXT NOT NULL);
//! ```

mod memory;
mod seed;
mod sqlite;

use std::sync::Arc;

use crate::config::{Backend, CatalogSettings};
use crate::error::Result;
use crate::model::Book;

pub use memory::MemoryCatalog;
pub use seed::{SEED_AUTHOR, seed_books};
pub use sqlite::SqliteCatalog;

/// The capability set shared by every catalog backing.
pub trait CatalogStore: Send + Sync {
    /// All books in insertion order.
    fn list(&self) -> Result<Vec<Book>>;

    /// Look up a book. A missing ID is `Ok(None)`, never an error.
    fn get(&self, id: i32) -> Result<Option<Book>>;

    /// Append a new book with the next ID (`count + 1`) and return it.
    fn create(&self, title: &str) -> Result<Book>;
}

/// Open the backing selected by configuration.
pub fn open_catalog(settings: &CatalogSettings) -> Result<Arc<dyn CatalogStore>> {
    tracing::debug!(backend = %settings.backend, "Opening catalog");
    let store: Arc<dyn CatalogStore> = match settings.backend {
        Backend::Memory if settings.seed => Arc::new(MemoryCatalog::seeded()),
        Backend::Memory => Arc::new(MemoryCatalog::new()),
        Backend::Sqlite => Arc::new(SqliteCatalog::open(&settings.database)?),
    };
    Ok(store)
}
