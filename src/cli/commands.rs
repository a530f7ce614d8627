use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Backend;

#[derive(Parser)]
#[command(name = "bookql")]
#[command(
    author,
    version,
    about = "An in-process GraphQL API over a small book catalog"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (searches upward for .bookql.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog backing to use (overrides config)
    #[arg(long, global = true, value_enum, env = "BOOKQL_BACKEND")]
    pub backend: Option<Backend>,

    /// Path to the SQLite database (overrides config)
    #[arg(long, global = true, env = "BOOKQL_DATABASE")]
    pub database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in createBook mutation and book(id: 2) query (default)
    Demo,

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (wraps a bare body in 'mutation { }')
    Mutate {
        /// Mutation body, or a full 'mutation ...' operation when using variables
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// List all books
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single book
    Show {
        /// Book ID
        id: i32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the GraphQL schema in SDL form
    Schema {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create the SQLite books table
    #[command(name = "init-db")]
    InitDb {
        /// Leave the new table empty
        #[arg(long)]
        no_seed: bool,
    },
}
