use anyhow::Result;

use crate::graphql::execute;

use super::CommandContext;
use super::utils::block_on;

pub fn handle_mutate(
    ctx: &CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = ctx.schema();

    let document = mutation_document(&mutation);
    let response = block_on(execute(&schema, &document, variables.as_deref()))??;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// A bare selection is wrapped in `mutation { }`. A full operation (which is
/// the only way to declare `$variables`) is passed through as written.
fn mutation_document(body: &str) -> String {
    let trimmed = body.trim_start();
    let is_operation = trimmed
        .strip_prefix("mutation")
        .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric() || c == '_'));
    if is_operation {
        trimmed.to_string()
    } else {
        format!("mutation {{ {} }}", body)
    }
}
