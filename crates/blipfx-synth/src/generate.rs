//! Full-waveform entry points.
//!
//! These run a fresh [`SynthEngine`] for exactly
//! [`SynthEngine::total_samples`] samples and enforce the output contract:
//! every sample finite and within `[-1, 1]`.

use rand::Rng;

use crate::engine::SynthEngine;
use crate::error::SynthResult;
use crate::params::ParameterSet;
use crate::rng::create_engine_rng;
use crate::wav::{WavResult, WavWriter};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Result of generating one sound.
#[derive(Debug)]
pub struct GenerateResult {
    /// Samples in `[-1, 1]`.
    pub samples: Vec<f64>,
    /// Encoded 16-bit mono WAV.
    pub wav: WavResult,
    /// Base seed the engine stream was derived from.
    pub seed: u32,
}

/// Clamps a raw engine sample to the output range.
///
/// Non-finite values can only come from extreme tan excursions and are
/// replaced by silence.
#[inline]
pub fn sanitize_sample(sample: f64) -> f64 {
    if sample.is_finite() {
        sample.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Synthesizes the complete sample sequence for `params` using `rng` as the
/// engine's noise source.
pub fn generate_samples<R: Rng>(params: &ParameterSet, rng: R) -> Vec<f64> {
    let mut engine = SynthEngine::new(params, rng);
    let total = engine.total_samples();
    let mut samples = Vec::with_capacity(total);
    for _ in 0..total {
        samples.push(sanitize_sample(engine.next_sample()));
    }
    samples
}

/// Synthesizes `params` with the engine stream derived from `seed` and
/// encodes the result as WAV.
pub fn generate(params: &ParameterSet, seed: u32) -> SynthResult<GenerateResult> {
    let samples = generate_samples(params, create_engine_rng(seed));
    let wav = WavWriter::mono(SAMPLE_RATE).finish(&samples)?;
    Ok(GenerateResult { samples, wav, seed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MIN_OUTPUT_SAMPLES;
    use crate::params::{Archetype, ParamId, WaveType};
    use crate::rng::{create_params_rng, create_rng};

    #[test]
    fn test_sanitize_sample() {
        assert_eq!(sanitize_sample(0.5), 0.5);
        assert_eq!(sanitize_sample(3.0), 1.0);
        assert_eq!(sanitize_sample(-3.0), -1.0);
        assert_eq!(sanitize_sample(f64::NAN), 0.0);
        assert_eq!(sanitize_sample(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_default_params_every_wave_type() {
        for wave_type in WaveType::ALL {
            let mut params = ParameterSet::new();
            params.set_wave_type(wave_type);
            let samples = generate_samples(&params, create_rng(0));
            assert!(samples.len() >= MIN_OUTPUT_SAMPLES);
            assert!(samples
                .iter()
                .all(|s| s.is_finite() && (-1.0..=1.0).contains(s)));
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let mut params = ParameterSet::new();
        params.generate(Archetype::PickupCoin, &mut create_params_rng(5));

        let a = generate(&params, 5).unwrap();
        let b = generate(&params, 5).unwrap();
        assert_eq!(a.samples, b.samples);
        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
        assert_eq!(a.seed, 5);
    }

    #[test]
    fn test_generate_wav_matches_samples() {
        let mut params = ParameterSet::new();
        params.set(ParamId::DecayTime, 0.1);
        let result = generate(&params, 1).unwrap();
        assert_eq!(result.wav.num_samples, result.samples.len());
        assert_eq!(result.wav.sample_rate, SAMPLE_RATE);
    }

    #[test]
    fn test_mutate_zero_does_not_change_sound() {
        let mut params = ParameterSet::new();
        params.generate(Archetype::LaserShoot, &mut create_rng(21));
        let before = generate_samples(&params, create_rng(3));

        params.mutate(0.0, &mut create_rng(22));
        let after = generate_samples(&params, create_rng(3));

        assert_eq!(before, after);
    }
}
