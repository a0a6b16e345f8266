//! Archetypes command implementation

use anyhow::{Context, Result};
use blipfx_synth::Archetype;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

#[derive(Debug, Serialize)]
struct ArchetypeRow {
    name: &'static str,
    description: &'static str,
}

/// Run the archetypes command
pub fn run(json: bool) -> Result<ExitCode> {
    let rows: Vec<ArchetypeRow> = Archetype::ALL
        .iter()
        .map(|a| ArchetypeRow {
            name: a.name(),
            description: a.description(),
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&rows).context("Failed to serialize archetypes")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Archetypes".cyan().bold());
    for row in &rows {
        println!("  {} {:<12} {}", "->".green(), row.name, row.description.dimmed());
    }
    Ok(ExitCode::SUCCESS)
}
