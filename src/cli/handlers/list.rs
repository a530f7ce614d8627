use anyhow::Result;

use super::CommandContext;
use super::utils::print_book_list;

pub fn handle_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let books = ctx.store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else {
        print_book_list(&books);
    }
    Ok(())
}
