//! # bookql - a GraphQL API over a small book catalog
//!
//! bookql builds an in-process GraphQL schema over a book catalog and runs
//! GraphQL documents against it. The catalog lives either in memory (seeded
//! with three books) or in a SQLite `books` table.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the built-in createBook mutation and book(id: 2) query
//! bookql
//!
//! # Run your own query
//! bookql query '{ list { id title author { name } } }'
//!
//! # Use a SQLite database instead of the in-memory catalog
//! bookql --backend sqlite --database books.db init-db
//! bookql --backend sqlite --database books.db list
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and execution
//! - [`model`]: Data models (Book, Author, Description)
//! - [`storage`]: Catalog stores (in-memory and SQLite)
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.bookql.toml` discovery and CLI overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `CatalogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying and creating books.
pub mod graphql;

pub mod logging;

/// Data models for the catalog.
pub mod model;

/// Catalog storage behind the `CatalogStore` trait.
pub mod storage;

/// Input validation utilities.
pub mod validation;
