//! Data models for the book catalog.
//!
//! - [`Book`]: a catalog entry with an embedded author
//! - [`Author`]: author name plus a denormalized list of book IDs
//! - [`Description`]: a free-text annotation attached to a book

mod book;

pub use book::{Author, Book, Description};
