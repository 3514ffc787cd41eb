//! Rendering a computed boundary for display.

use anyhow::Result;
use colored::Colorize;

use vspace_core::prelude::{Boundary, Term};

use crate::config::OutputFormat;

pub fn render(boundary: &Boundary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(boundary)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(boundary)? + "\n"),
    }
}

/// The specific hypothesis as one block, then each general row as its
/// own block, in row order.
pub fn render_text(boundary: &Boundary) -> String {
    let width = boundary
        .attributes()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        "Final Specific Hypothesis:".white().bold().to_string(),
        format!("  {}", vector(boundary.specific())),
        String::new(),
        "Final General Hypothesis:".white().bold().to_string(),
    ];

    for (j, row) in boundary.general().iter().enumerate() {
        let name = boundary.attributes().get(j).map(String::as_str).unwrap_or("");
        lines.push(format!(
            "  {} {}",
            format!("{:<width$}", name, width = width).dimmed(),
            vector(row)
        ));
    }

    let summary = boundary.summary();
    lines.push(String::new());
    lines.push(format!(
        "{} {} examples ({} positive, {} negative)",
        "✓".green(),
        summary.total().to_string().cyan(),
        summary.positives,
        summary.negatives
    ));

    lines.join("\n") + "\n"
}

fn vector(terms: &[Term]) -> String {
    let cells: Vec<String> = terms.iter().map(Term::to_string).collect();
    format!("[{}]", cells.join(", "))
}
