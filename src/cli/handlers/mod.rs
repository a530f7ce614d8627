mod demo;
mod init_db;
mod list;
mod mutate;
mod query;
mod schema;
mod show;
mod utils;

pub use demo::handle_demo;
pub use init_db::handle_init_db;
pub use list::handle_list;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use show::handle_show;

use std::sync::Arc;

use crate::config::BookqlConfig;
use crate::error::Result;
use crate::graphql::{CatalogSchema, build_schema};
use crate::storage::{CatalogStore, open_catalog};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub store: Arc<dyn CatalogStore>,
}

impl CommandContext {
    pub fn new(config: &BookqlConfig) -> Result<Self> {
        let store = open_catalog(&config.catalog)?;
        Ok(Self { store })
    }

    pub fn schema(&self) -> CatalogSchema {
        build_schema(Arc::clone(&self.store))
    }
}
