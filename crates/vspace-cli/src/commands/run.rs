//! Compute and render the boundary of a table.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing::info;

use vspace_core::prelude::*;

use crate::config::OutputFormat;
use crate::render::render;

pub struct RunArgs<'a> {
    pub file: &'a Path,
    pub target: &'a str,
    pub options: LoaderOptions,
    pub policy: LabelPolicy,
    pub format: OutputFormat,
    pub output: Option<&'a Path>,
}

pub fn run(args: RunArgs<'_>) -> Result<()> {
    let table = load_table_from_path(args.file, &args.options)
        .with_context(|| format!("Failed to load table: {}", args.file.display()))?;

    info!(
        target_column = args.target,
        positive = args.policy.positive(),
        rows = table.len(),
        "computing boundary"
    );

    let boundary = compute_from_table(&table, args.target, &args.policy)
        .with_context(|| format!("Failed to compute boundary for '{}'", args.target))?;

    if args.output.is_some() {
        // no escape codes in files
        colored::control::set_override(false);
    }
    let rendered = render(&boundary, args.format)?;

    match args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Wrote boundary to {}",
                "✓".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
