use anyhow::Result;

use crate::error::CatalogError;
use crate::validation;

use super::CommandContext;
use super::utils::print_book;

pub fn handle_show(ctx: &CommandContext, id: i32, json: bool) -> Result<()> {
    validation::validate_id(id)?;

    let Some(book) = ctx.store.get(id)? else {
        tracing::warn!(id, "Book not found");
        return Err(CatalogError::NotFound(id).into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        print_book(&book);
    }
    Ok(())
}
