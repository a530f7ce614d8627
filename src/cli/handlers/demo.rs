use anyhow::{Context, Result};
use colored::Colorize;

use crate::graphql::run_demo;

use super::CommandContext;
use super::utils::block_on;

pub fn handle_demo(ctx: &CommandContext) -> Result<()> {
    println!("{}", "My Books (a GraphQL API)".bold());

    let schema = ctx.schema();
    let responses = block_on(run_demo(&schema))?
        .context("Failed to execute GraphQL operation")?;

    for response in &responses {
        println!("{}", serde_json::to_string(response)?);
    }
    Ok(())
}
