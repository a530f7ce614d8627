use anyhow::Result;

use crate::graphql::execute;

use super::CommandContext;
use super::utils::block_on;

pub fn handle_query(ctx: &CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = ctx.schema();
    let response = block_on(execute(&schema, &query, variables.as_deref()))??;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
