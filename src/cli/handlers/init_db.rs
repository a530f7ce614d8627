use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{Backend, BookqlConfig};
use crate::storage::{CatalogStore, SqliteCatalog};

pub fn handle_init_db(config: &BookqlConfig, no_seed: bool) -> Result<()> {
    if config.catalog.backend != Backend::Sqlite {
        anyhow::bail!(
            "init-db needs the sqlite backend (current backend: {}). Pass --backend sqlite.",
            config.catalog.backend
        );
    }

    let path = &config.catalog.database;
    let catalog = SqliteCatalog::initialize(path, !no_seed)
        .with_context(|| format!("Failed to initialize database at {}", path.display()))?;
    let count = catalog.list()?.len();

    println!(
        "{} {} ({} books)",
        "Initialized".green(),
        path.display(),
        count
    );
    Ok(())
}
