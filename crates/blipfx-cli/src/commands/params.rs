//! Params command implementation
//!
//! Lists the parameter table.

use anyhow::{Context, Result};
use blipfx_synth::params::PARAMETERS;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

/// One row of the parameter listing.
#[derive(Debug, Clone, Serialize)]
pub struct ParamRow {
    pub name: &'static str,
    pub label: &'static str,
    pub group: &'static str,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub random_power: f64,
    pub description: &'static str,
}

/// All parameters in canonical order.
pub fn rows() -> Vec<ParamRow> {
    PARAMETERS
        .iter()
        .map(|desc| ParamRow {
            name: desc.name,
            label: desc.label,
            group: desc.group.label(),
            default: desc.default,
            min: desc.min,
            max: desc.max,
            random_power: desc.random_power,
            description: desc.description,
        })
        .collect()
}

/// Run the params command
pub fn run(json: bool) -> Result<ExitCode> {
    let rows = rows();

    if json {
        let out = serde_json::to_string_pretty(&rows).context("Failed to serialize parameters")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Parameters".cyan().bold());
    println!(
        "  {:<24} {:<16} {:>7} {:>5} {:>5} {:>6}",
        "name".bold(),
        "group".bold(),
        "default".bold(),
        "min".bold(),
        "max".bold(),
        "power".bold()
    );
    let mut group = "";
    for row in &rows {
        if row.group != group {
            group = row.group;
            println!();
        }
        println!(
            "  {:<24} {:<16} {:>7.2} {:>5.1} {:>5.1} {:>6.2}",
            row.name, row.group, row.default, row.min, row.max, row.random_power
        );
    }
    Ok(ExitCode::SUCCESS)
}
