//! GraphQL schema, resolvers and execution for the book catalog.
//!
//! ## Usage
//!
//! ```bash
//! # Run the two built-in documents
//! bookql demo
//!
//! # Execute a query from CLI
//! bookql query '{ book(id: 2) { id title author { name } } }'
//!
//! # Execute a mutation from CLI
//! bookql mutate 'createBook(title: "New book") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `list`
//! - **Mutations**: `createBook`

mod executor;
mod schema;
mod types;

pub use executor::{DEMO_DOCUMENTS, execute, execute_strict, run_demo};
pub use schema::{CatalogSchema, MutationRoot, QueryRoot, build_schema, schema_sdl};
pub use types::*;
