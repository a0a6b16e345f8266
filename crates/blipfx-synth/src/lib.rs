//! blipfx synthesis core
//!
//! Procedural generation of short retro sound effects in the sfxr/bfxr
//! tradition. A [`ParameterSet`] of about thirty normalized knobs plus a
//! [`WaveType`] fully describes a sound; the [`SynthEngine`] turns it into
//! mono samples in `[-1, 1]`.
//!
//! # Overview
//!
//! - **Parameters** - bounded knobs with lock flags, seven archetype
//!   generators, mutation and full randomization
//! - **Engine** - eight-times supersampled oscillator with pitch slides,
//!   pitch jumps, vibrato, an attack/sustain/decay envelope, resonant
//!   low-pass and high-pass filters, a flanger, bit crushing and compression
//! - **WAV** - deterministic 16-bit mono encoding
//!
//! # Determinism
//!
//! All randomness flows through an injected [`rand::Rng`]. The [`rng`]
//! module derives independent PCG32 streams for preset generation and for
//! the engine's noise from one base seed, so the same parameters and seed
//! always produce the same samples.
//!
//! # Example
//!
//! ```
//! use blipfx_synth::rng::create_params_rng;
//! use blipfx_synth::{generate, Archetype, ParameterSet};
//!
//! let mut params = ParameterSet::new();
//! params.generate(Archetype::PickupCoin, &mut create_params_rng(42));
//!
//! let result = generate(&params, 42).unwrap();
//! assert!(result.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
//! assert_eq!(result.wav.num_samples, result.samples.len());
//! ```

pub mod engine;
pub mod error;
pub mod generate;
pub mod lfsr;
pub mod params;
pub mod pink_noise;
pub mod rng;
pub mod wav;

pub use engine::{EnvelopeStage, SynthEngine};
pub use error::{SynthError, SynthResult};
pub use generate::{generate, generate_samples, GenerateResult, SAMPLE_RATE};
pub use params::{Archetype, ParamDescriptor, ParamGroup, ParamId, ParameterSet, WaveType};
pub use wav::{WavResult, WavWriter};
