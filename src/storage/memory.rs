use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::CatalogStore;
use super::seed::seed_books;
use crate::{
    error::{CatalogError, Result},
    model::Book,
    validation,
};

/// Process-lifetime catalog held in memory. Lookups are linear scans.
#[derive(Default)]
pub struct MemoryCatalog {
    books: RwLock<Vec<Book>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the vector half-written,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogStore for MemoryCatalog {
    fn list(&self) -> Result<Vec<Book>> {
        Ok(self.read().clone())
    }

    fn get(&self, id: i32) -> Result<Option<Book>> {
        tracing::debug!(id, "Looking up book in memory");
        Ok(self.read().iter().find(|b| b.id == id).cloned())
    }

    fn create(&self, title: &str) -> Result<Book> {
        validation::validate_title(title)?;

        let mut books = self.write();
        let id = books.len() as i32 + 1;
        if books.iter().any(|b| b.id == id) {
            tracing::warn!(id, "Next book ID already present in catalog");
            return Err(CatalogError::Conflict(id));
        }
        let book = Book::new(id, title);
        tracing::info!(id, title = %book.title, "Creating book");
        books.push(book.clone());
        Ok(book)
    }
}
