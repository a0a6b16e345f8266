//! Mutate command implementation
//!
//! Nudges each unlocked parameter of a parameter file by a small random
//! amount.

use anyhow::{bail, Result};
use blipfx_synth::params::DEFAULT_MUTATION;
use blipfx_synth::rng::create_params_rng;
use std::process::ExitCode;

use super::output::{print_report, write_sound, OutputPaths};
use super::SoundReport;
use crate::input::{apply_locks, load_params};

/// Default `--amount`, as a string for clap.
pub const DEFAULT_AMOUNT: &str = "0.05";

/// Mutates the parameter file at `params_path` and writes the outputs.
pub fn execute(
    params_path: &str,
    amount: f64,
    seed: u32,
    locks: &[String],
    out: Option<&str>,
    params_out: Option<&str>,
) -> Result<SoundReport> {
    if !amount.is_finite() || amount < 0.0 {
        bail!("Mutation amount must be a non-negative number, got {}", amount);
    }

    let mut params = load_params(params_path)?;
    apply_locks(&mut params, locks)?;
    params.mutate(amount, &mut create_params_rng(seed));

    write_sound(
        "mutate",
        None,
        &params,
        seed,
        OutputPaths {
            wav: out,
            params: params_out,
        },
    )
}

/// Run the mutate command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    params_path: &str,
    amount: f64,
    seed: u32,
    locks: &[String],
    out: Option<&str>,
    params_out: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let report = execute(params_path, amount, seed, locks, out, params_out)?;
    print_report("Mutated sound:", &report, json)?;
    Ok(ExitCode::SUCCESS)
}
