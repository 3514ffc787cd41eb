//! List a table's columns and their inferred kinds.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use vspace_core::prelude::*;

pub fn run(file: &Path, options: &LoaderOptions) -> Result<()> {
    let table = load_table_from_path(file, options)
        .with_context(|| format!("Failed to load table: {}", file.display()))?;

    println!(
        "{} {} ({} rows)",
        "→".blue(),
        file.display().to_string().cyan(),
        table.len()
    );
    println!();

    for (i, (name, kind)) in table.columns().iter().zip(table.kinds()).enumerate() {
        println!(
            "  {} {} {}",
            format!("{}.", i + 1).blue(),
            name.white().bold(),
            format!("({})", kind).dimmed()
        );
    }

    Ok(())
}
