//! Preset command implementation
//!
//! Generates a sound from one of the archetype recipes.

use anyhow::{Context, Result};
use blipfx_synth::rng::create_params_rng;
use blipfx_synth::{Archetype, ParameterSet};
use std::process::ExitCode;

use super::output::{print_report, write_sound, OutputPaths};
use super::SoundReport;

/// Builds the parameters for `archetype` at `seed`.
pub fn preset_params(archetype: Archetype, seed: u32) -> ParameterSet {
    let mut params = ParameterSet::new();
    params.generate(archetype, &mut create_params_rng(seed));
    params
}

/// Generates the preset and writes the requested outputs.
pub fn execute(
    archetype: &str,
    seed: u32,
    out: Option<&str>,
    params_out: Option<&str>,
) -> Result<SoundReport> {
    let archetype: Archetype = archetype
        .parse()
        .with_context(|| "Run `blipfx archetypes` to list the available archetypes")?;
    let params = preset_params(archetype, seed);
    write_sound(
        "preset",
        Some(archetype.name()),
        &params,
        seed,
        OutputPaths {
            wav: out,
            params: params_out,
        },
    )
}

/// Run the preset command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    archetype: &str,
    seed: u32,
    out: Option<&str>,
    params_out: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let report = execute(archetype, seed, out, params_out)?;
    let title = format!("Preset {}:", report.archetype.as_deref().unwrap_or(archetype));
    print_report(&title, &report, json)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blipfx_synth::WaveType;

    #[test]
    fn test_preset_is_seeded() {
        let a = preset_params(Archetype::LaserShoot, 9);
        let b = preset_params(Archetype::LaserShoot, 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_execute_accepts_loose_names() {
        let report = execute("Pickup-Coin", 1, None, None).unwrap();
        assert_eq!(report.archetype.as_deref(), Some("pickup_coin"));
    }

    #[test]
    fn test_execute_explosion_is_noise() {
        let report = execute("explosion", 4, None, None).unwrap();
        assert_eq!(report.wave_type, WaveType::Noise.name());
    }

    #[test]
    fn test_unknown_archetype() {
        let err = execute("kaboom", 0, None, None).unwrap_err();
        assert!(format!("{:#}", err).contains("kaboom"));
    }
}
