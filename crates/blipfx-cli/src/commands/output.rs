//! Shared sound output: synthesis, file writes, and reporting.

use anyhow::{Context, Result};
use blipfx_synth::{generate, ParameterSet};
use colored::Colorize;
use serde::Serialize;
use std::fs;

use crate::input::save_params;

/// Where a command writes its results.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OutputPaths<'a> {
    /// WAV destination.
    pub wav: Option<&'a str>,
    /// Parameter JSON destination.
    pub params: Option<&'a str>,
}

/// Machine-readable summary of one synthesized sound.
#[derive(Debug, Clone, Serialize)]
pub struct SoundReport {
    /// Command that produced the sound.
    pub command: String,
    /// Archetype name, for presets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    /// Base seed.
    pub seed: u32,
    /// Oscillator wave type.
    pub wave_type: String,
    /// Number of samples.
    pub num_samples: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
    /// Written WAV path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wav_path: Option<String>,
    /// Written parameter file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params_path: Option<String>,
    /// The parameters that were synthesized.
    pub params: ParameterSet,
}

/// Synthesizes `params`, writes the requested files and returns a report.
pub(crate) fn write_sound(
    command: &str,
    archetype: Option<&str>,
    params: &ParameterSet,
    seed: u32,
    paths: OutputPaths<'_>,
) -> Result<SoundReport> {
    let result = generate(params, seed).context("Failed to synthesize sound")?;

    if let Some(path) = paths.wav {
        fs::write(path, &result.wav.wav_data)
            .with_context(|| format!("Failed to write WAV file: {}", path))?;
    }
    if let Some(path) = paths.params {
        save_params(params, path)?;
    }

    Ok(SoundReport {
        command: command.to_string(),
        archetype: archetype.map(str::to_string),
        seed,
        wave_type: params.wave_type().name().to_string(),
        num_samples: result.wav.num_samples,
        duration_seconds: result.wav.duration_seconds(),
        pcm_hash: result.wav.pcm_hash,
        wav_path: paths.wav.map(str::to_string),
        params_path: paths.params.map(str::to_string),
        params: params.clone(),
    })
}

/// Prints a report as JSON or as colored text.
///
/// In text mode, when nothing was written to disk the parameter JSON goes to
/// stdout so the result is never lost.
pub(crate) fn print_report(title: &str, report: &SoundReport, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{} {}", title.cyan().bold(), report.seed.to_string().dimmed());
    println!("  {:<12} {}", "wave type", report.wave_type);
    println!(
        "  {:<12} {} ({:.3}s)",
        "samples", report.num_samples, report.duration_seconds
    );
    println!("  {:<12} {}", "pcm hash", report.pcm_hash.dimmed());

    if let Some(path) = &report.wav_path {
        println!("{} wrote {}", "ok".green(), path);
    }
    if let Some(path) = &report.params_path {
        println!("{} wrote {}", "ok".green(), path);
    }
    if report.wav_path.is_none() && report.params_path.is_none() {
        println!(
            "{} no --out or --params-out given; parameters follow",
            "!!".yellow()
        );
        let params = report
            .params
            .to_json_pretty()
            .context("Failed to serialize parameters")?;
        println!("{}", params);
    }
    Ok(())
}
