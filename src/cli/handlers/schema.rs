use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::graphql::schema_sdl;

use super::CommandContext;

pub fn handle_schema(ctx: &CommandContext, output: Option<PathBuf>) -> Result<()> {
    let sdl = schema_sdl(&ctx.schema());

    match output {
        Some(path) => {
            std::fs::write(&path, &sdl)
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            eprintln!(
                "{} {} ({} bytes)",
                "Exported schema to".green(),
                path.display(),
                sdl.len()
            );
        }
        None => print!("{}", sdl),
    }
    Ok(())
}
