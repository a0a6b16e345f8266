//! End-to-end generation tests for blipfx
//!
//! Generates every archetype and wave type, writes real WAV files and reads
//! them back with an independent decoder.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p blipfx-tests --test e2e_generation
//!
//! # 10k-seed sweep
//! cargo test -p blipfx-tests --test e2e_generation -- --ignored
//! ```

use std::fs;
use std::io::Cursor;

use blipfx_synth::engine::MIN_OUTPUT_SAMPLES;
use blipfx_synth::rng::create_engine_rng;
use blipfx_synth::wav::{read_sample_count, FULL_SCALE};
use blipfx_synth::{generate, generate_samples, SynthEngine, WavWriter, SAMPLE_RATE};
use blipfx_tests::determinism::verify_determinism;
use blipfx_tests::fixtures::{archetype_fixtures, random_fixture, wave_fixtures};

fn expected_len(params: &blipfx_synth::ParameterSet) -> usize {
    let engine = SynthEngine::new(params, create_engine_rng(0));
    (engine.envelope_full_length() as usize).max(MIN_OUTPUT_SAMPLES)
}

// ============================================================================
// Output contract
// ============================================================================

#[test]
fn test_archetypes_produce_valid_audio() {
    for seed in 0..8 {
        for fixture in archetype_fixtures(seed) {
            let result = generate(&fixture.params, fixture.seed).unwrap();
            assert_eq!(
                result.samples.len(),
                expected_len(&fixture.params),
                "{}",
                fixture.name
            );
            assert!(
                result
                    .samples
                    .iter()
                    .all(|s| s.is_finite() && (-1.0..=1.0).contains(s)),
                "{} left the output range",
                fixture.name
            );
        }
    }
}

#[test]
fn test_wave_types_produce_valid_audio() {
    for fixture in wave_fixtures() {
        let result = generate(&fixture.params, 0).unwrap();
        assert!(result.samples.len() >= MIN_OUTPUT_SAMPLES);
        assert!(result.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }
}

#[test]
fn test_caller_params_not_modified() {
    let fixture = random_fixture(17);
    let before = fixture.params.clone();
    generate(&fixture.params, 17).unwrap();
    assert_eq!(fixture.params, before);
}

// ============================================================================
// WAV container
// ============================================================================

#[test]
fn test_wav_file_reads_back_with_hound() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("coin.wav");

    let fixture = &archetype_fixtures(3)[0];
    let result = generate(&fixture.params, fixture.seed).unwrap();
    fs::write(&path, &result.wav.wav_data).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let format = reader.spec();
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, SAMPLE_RATE);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(reader.len() as usize, result.samples.len());

    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    for (pcm, sample) in decoded.iter().zip(&result.samples) {
        assert_eq!(*pcm, (sample * FULL_SCALE) as i16);
    }
}

#[test]
fn test_streamed_file_matches_buffered() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("stream.wav");

    let fixture = random_fixture(5);
    let buffered = generate(&fixture.params, 5).unwrap();

    let samples = generate_samples(&fixture.params, create_engine_rng(5));
    let count = WavWriter::mono(SAMPLE_RATE)
        .write_file(&path, samples)
        .unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(count, buffered.samples.len());
    assert_eq!(read_sample_count(&bytes).unwrap(), count);
    assert_eq!(bytes, buffered.wav.wav_data);
}

#[test]
fn test_hound_reads_in_memory_output() {
    let result = generate(&random_fixture(9).params, 9).unwrap();
    let reader = hound::WavReader::new(Cursor::new(result.wav.wav_data)).unwrap();
    assert_eq!(reader.duration() as usize, result.samples.len());
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_generation_is_deterministic() {
    for fixture in archetype_fixtures(42) {
        verify_determinism(
            || generate(&fixture.params, fixture.seed).unwrap().wav.wav_data,
            3,
        )
        .assert_deterministic();
    }
}

#[test]
fn test_random_fixture_is_deterministic() {
    let a = random_fixture(1234);
    let b = random_fixture(1234);
    assert_eq!(a.params, b.params);
    assert_ne!(a.params, random_fixture(1235).params);
}

fn check_random_seeds(seeds: std::ops::Range<u32>) {
    for seed in seeds {
        let fixture = random_fixture(seed);

        let mut engine = SynthEngine::new(&fixture.params, create_engine_rng(seed));
        for i in 0..engine.total_samples() {
            let raw = engine.next_sample();
            assert!(raw.is_finite(), "seed {} sample {} is {}", seed, i, raw);
        }

        let samples = generate_samples(&fixture.params, create_engine_rng(seed));
        assert!(
            samples
                .iter()
                .all(|s| s.is_finite() && (-1.0..=1.0).contains(s)),
            "seed {} left the output range",
            seed
        );
        assert!(samples.len() >= MIN_OUTPUT_SAMPLES);
    }
}

#[test]
fn test_random_sweep_300_seeds() {
    check_random_seeds(0..300);
}

#[test]
#[ignore]
fn test_random_sweep_10k_seeds() {
    check_random_seeds(0..10_000);
}
