use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::CatalogStore;

use super::types::*;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Compose the resolvers with a catalog. Each schema owns its own store
/// handle, so independent schemas never share state.
pub fn build_schema(store: Arc<dyn CatalogStore>) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// The schema in SDL form.
pub fn schema_sdl(schema: &CatalogSchema) -> String {
    schema.sdl()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn CatalogStore>> {
    ctx.data::<Arc<dyn CatalogStore>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get Book by ID
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = get_store(ctx)?;
        Ok(store.get(id)?.map(Into::into))
    }

    /// Get list of All Books.
    async fn list(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = get_store(ctx)?;
        Ok(store.list()?.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new book
    async fn create_book(&self, ctx: &Context<'_>, title: String) -> async_graphql::Result<Book> {
        let store = get_store(ctx)?;
        Ok(store.create(&title)?.into())
    }
}
