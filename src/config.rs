use crate::error::{CatalogError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookql.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookqlConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Which store backs the catalog for a run. The two are never mixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Memory,
    Sqlite,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Memory => write!(f, "memory"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default = "default_database")]
    pub database: PathBuf,

    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_database() -> PathBuf {
    PathBuf::from("./go-graphql-books.db")
}

fn default_seed() -> bool {
    true
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            database: default_database(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl BookqlConfig {
    /// Load the nearest `.bookql.toml` above `start_path`, falling back to
    /// defaults when none exists. Relative database paths are resolved
    /// against the directory holding the config file.
    pub fn load(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: BookqlConfig = toml::from_str(&content)?;
        let root = path
            .parent()
            .ok_or_else(|| CatalogError::Config("Config file has no parent directory".to_string()))?;
        if config.catalog.database.is_relative() {
            config.catalog.database = root.join(&config.catalog.database);
        }
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
