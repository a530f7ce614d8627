//! Input validation for book data.

use crate::error::{CatalogError, Result};

/// Maximum allowed length for a book title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Validates a book title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(CatalogError::Validation(
            "Title cannot be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CatalogError::Validation(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

/// Validates a book ID. IDs are assigned from 1 upwards.
pub fn validate_id(id: i32) -> Result<()> {
    if id < 1 {
        return Err(CatalogError::Validation(format!(
            "Book ID must be positive, got {}",
            id
        )));
    }
    Ok(())
}
