//! blipfx CLI - procedural retro sound effects from the command line
//!
//! Generates archetype presets, random and mutated sounds, and renders
//! parameter files to 16-bit mono WAV.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use blipfx_cli::commands;

/// blipfx - sfxr-style sound effect synthesizer
#[derive(Parser)]
#[command(name = "blipfx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sound from an archetype (pickup_coin, laser_shoot, ...)
    Preset {
        /// Archetype name
        archetype: String,

        /// Base seed for preset and noise generation
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Output WAV path
        #[arg(short, long)]
        out: Option<String>,

        /// Output parameter JSON path
        #[arg(long)]
        params_out: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Randomize every unlocked parameter
    Random {
        /// Base seed for randomization and noise generation
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Starting parameter file; its values hold wherever a lock applies
        #[arg(short, long)]
        params: Option<String>,

        /// Parameter to keep fixed (repeatable; `wave_type` locks the wave)
        #[arg(long = "lock")]
        locks: Vec<String>,

        /// Output WAV path
        #[arg(short, long)]
        out: Option<String>,

        /// Output parameter JSON path
        #[arg(long)]
        params_out: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Nudge each unlocked parameter of a parameter file
    Mutate {
        /// Parameter file to mutate
        #[arg(short, long)]
        params: String,

        /// Largest change applied to a parameter
        #[arg(long, default_value = commands::mutate::DEFAULT_AMOUNT)]
        amount: f64,

        /// Base seed for mutation and noise generation
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Parameter to keep fixed (repeatable)
        #[arg(long = "lock")]
        locks: Vec<String>,

        /// Output WAV path
        #[arg(short, long)]
        out: Option<String>,

        /// Output parameter JSON path
        #[arg(long)]
        params_out: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a parameter file to WAV
    Render {
        /// Parameter file to render
        #[arg(short, long)]
        params: String,

        /// Seed for the noise generators
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List every parameter with its bounds
    Params {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the archetypes
    Archetypes {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Preset {
            archetype,
            seed,
            out,
            params_out,
            json,
        } => commands::preset::run(
            &archetype,
            seed,
            out.as_deref(),
            params_out.as_deref(),
            json,
        ),
        Commands::Random {
            seed,
            params,
            locks,
            out,
            params_out,
            json,
        } => commands::random::run(
            seed,
            params.as_deref(),
            &locks,
            out.as_deref(),
            params_out.as_deref(),
            json,
        ),
        Commands::Mutate {
            params,
            amount,
            seed,
            locks,
            out,
            params_out,
            json,
        } => commands::mutate::run(
            &params,
            amount,
            seed,
            &locks,
            out.as_deref(),
            params_out.as_deref(),
            json,
        ),
        Commands::Render {
            params,
            seed,
            out,
            json,
        } => commands::render::run(&params, seed, &out, json),
        Commands::Params { json } => commands::params::run(json),
        Commands::Archetypes { json } => commands::archetypes::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_preset() {
        let cli = Cli::try_parse_from([
            "blipfx",
            "preset",
            "laser_shoot",
            "--seed",
            "7",
            "--out",
            "zap.wav",
        ])
        .unwrap();
        match cli.command {
            Commands::Preset {
                archetype,
                seed,
                out,
                params_out,
                json,
            } => {
                assert_eq!(archetype, "laser_shoot");
                assert_eq!(seed, 7);
                assert_eq!(out.as_deref(), Some("zap.wav"));
                assert!(params_out.is_none());
                assert!(!json);
            }
            _ => panic!("expected preset command"),
        }
    }

    #[test]
    fn test_cli_parses_repeated_locks() {
        let cli = Cli::try_parse_from([
            "blipfx",
            "random",
            "--lock",
            "wave_type",
            "--lock",
            "attack_time",
        ])
        .unwrap();
        match cli.command {
            Commands::Random { locks, seed, .. } => {
                assert_eq!(locks, vec!["wave_type", "attack_time"]);
                assert_eq!(seed, 0);
            }
            _ => panic!("expected random command"),
        }
    }

    #[test]
    fn test_cli_mutate_default_amount() {
        let cli = Cli::try_parse_from(["blipfx", "mutate", "--params", "a.json"]).unwrap();
        match cli.command {
            Commands::Mutate { amount, params, .. } => {
                assert_eq!(amount, 0.05);
                assert_eq!(params, "a.json");
            }
            _ => panic!("expected mutate command"),
        }
    }

    #[test]
    fn test_cli_render_requires_out() {
        assert!(Cli::try_parse_from(["blipfx", "render", "--params", "a.json"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_seed() {
        assert!(Cli::try_parse_from(["blipfx", "preset", "jump", "--seed", "-1"]).is_err());
    }
}
