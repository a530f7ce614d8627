use anyhow::{Context, Result};
use clap::Parser;

use bookql::cli::handlers::{
    CommandContext, handle_demo, handle_init_db, handle_list, handle_mutate, handle_query,
    handle_schema, handle_show,
};
use bookql::cli::{Cli, Commands};
use bookql::config::BookqlConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    bookql::logging::init(&config.logging).context("Failed to initialize logging")?;
    tracing::debug!(backend = %config.catalog.backend, "Configuration loaded");

    let command = cli.command.unwrap_or(Commands::Demo);

    match command {
        Commands::Demo => handle_demo(&open_context(&config)?),
        Commands::Query { query, variables } => {
            handle_query(&open_context(&config)?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(&open_context(&config)?, mutation, variables),
        Commands::List { json } => handle_list(&open_context(&config)?, json),
        Commands::Show { id, json } => handle_show(&open_context(&config)?, id, json),
        Commands::Schema { output } => handle_schema(&open_context(&config)?, output),
        Commands::InitDb { no_seed } => handle_init_db(&config, no_seed),
    }
}

fn open_context(config: &BookqlConfig) -> Result<CommandContext> {
    CommandContext::new(config).context("Failed to open book catalog")
}

fn load_config(cli: &Cli) -> Result<BookqlConfig> {
    let mut config = match &cli.config {
        Some(path) => BookqlConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            BookqlConfig::load(&cwd).context("Failed to load bookql configuration")?
        }
    };

    if let Some(backend) = cli.backend {
        config.catalog.backend = backend;
    }
    if let Some(ref database) = cli.database {
        config.catalog.database = database.clone();
    }
    if cli.verbose {
        config.logging.verbose = true;
    }
    if let Some(ref log_file) = cli.log_file {
        config.logging.file = Some(log_file.clone());
    }

    Ok(config)
}
