//! Render command implementation
//!
//! Synthesizes a parameter file to WAV.

use anyhow::Result;
use std::process::ExitCode;

use super::output::{print_report, write_sound, OutputPaths};
use super::SoundReport;
use crate::input::load_params;

/// Renders `params_path` to `out`.
pub fn execute(params_path: &str, seed: u32, out: &str) -> Result<SoundReport> {
    let params = load_params(params_path)?;
    write_sound(
        "render",
        None,
        &params,
        seed,
        OutputPaths {
            wav: Some(out),
            params: None,
        },
    )
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(params_path: &str, seed: u32, out: &str, json: bool) -> Result<ExitCode> {
    let report = execute(params_path, seed, out)?;
    print_report(&format!("Rendered {}:", params_path), &report, json)?;
    Ok(ExitCode::SUCCESS)
}
