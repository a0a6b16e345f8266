//! Random command implementation
//!
//! Fully randomizes every unlocked parameter, optionally starting from a
//! parameter file whose locked values are kept.

use anyhow::Result;
use blipfx_synth::rng::create_params_rng;
use blipfx_synth::ParameterSet;
use std::process::ExitCode;

use super::output::{print_report, write_sound, OutputPaths};
use super::SoundReport;
use crate::input::{apply_locks, load_params_or_default};

/// Randomizes `base` in place at `seed`.
pub fn randomize_params(base: &mut ParameterSet, seed: u32) {
    base.randomize(&mut create_params_rng(seed));
}

/// Randomizes and writes the requested outputs.
pub fn execute(
    seed: u32,
    base: Option<&str>,
    locks: &[String],
    out: Option<&str>,
    params_out: Option<&str>,
) -> Result<SoundReport> {
    let mut params = load_params_or_default(base)?;
    apply_locks(&mut params, locks)?;
    randomize_params(&mut params, seed);
    write_sound(
        "random",
        None,
        &params,
        seed,
        OutputPaths {
            wav: out,
            params: params_out,
        },
    )
}

/// Run the random command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    seed: u32,
    base: Option<&str>,
    locks: &[String],
    out: Option<&str>,
    params_out: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let report = execute(seed, base, locks, out, params_out)?;
    print_report("Random sound:", &report, json)?;
    Ok(ExitCode::SUCCESS)
}
