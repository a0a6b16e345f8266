//! CLI command tests against real files.

use std::fs;

use blipfx_cli::commands::{mutate, preset, random, render};
use blipfx_cli::input::load_params;
use blipfx_synth::wav::{compute_pcm_hash, read_sample_count};
use blipfx_synth::{Archetype, ParamId, WaveType};
use pretty_assertions::assert_eq;

#[test]
fn test_preset_writes_wav_and_params() {
    let tmp = tempfile::tempdir().unwrap();
    let wav = tmp.path().join("coin.wav");
    let json = tmp.path().join("coin.json");

    let report = preset::execute(
        "pickup_coin",
        7,
        Some(wav.to_str().unwrap()),
        Some(json.to_str().unwrap()),
    )
    .unwrap();

    let bytes = fs::read(&wav).unwrap();
    assert_eq!(read_sample_count(&bytes).unwrap(), report.num_samples);
    assert_eq!(compute_pcm_hash(&bytes).unwrap(), report.pcm_hash);

    let saved = load_params(json.to_str().unwrap()).unwrap();
    assert_eq!(saved, preset::preset_params(Archetype::PickupCoin, 7));
}

#[test]
fn test_render_reproduces_preset() {
    let tmp = tempfile::tempdir().unwrap();
    let first = tmp.path().join("first.wav");
    let json = tmp.path().join("laser.json");
    let second = tmp.path().join("second.wav");

    preset::execute(
        "laser_shoot",
        3,
        Some(first.to_str().unwrap()),
        Some(json.to_str().unwrap()),
    )
    .unwrap();
    render::execute(json.to_str().unwrap(), 3, second.to_str().unwrap()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_random_from_base_keeps_locked_values() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().join("base.json");
    fs::write(
        &base,
        r#"{
            "wave_type": "breaker",
            "params": { "decay_time": 0.25 },
            "locked": ["decay_time"],
            "wave_type_locked": true
        }"#,
    )
    .unwrap();

    let report = random::execute(99, Some(base.to_str().unwrap()), &[], None, None).unwrap();
    assert_eq!(report.params.get(ParamId::DecayTime), 0.25);
    assert_eq!(report.params.wave_type(), WaveType::Breaker);
}

#[test]
fn test_mutate_writes_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let base = tmp.path().join("base.json");
    let out_json = tmp.path().join("mutated.json");
    let out_wav = tmp.path().join("mutated.wav");

    preset::execute("jump", 1, None, Some(base.to_str().unwrap())).unwrap();
    let report = mutate::execute(
        base.to_str().unwrap(),
        0.1,
        2,
        &["start_frequency".to_string()],
        Some(out_wav.to_str().unwrap()),
        Some(out_json.to_str().unwrap()),
    )
    .unwrap();

    let original = load_params(base.to_str().unwrap()).unwrap();
    let mutated = load_params(out_json.to_str().unwrap()).unwrap();
    assert_eq!(
        mutated.get(ParamId::StartFrequency),
        original.get(ParamId::StartFrequency)
    );
    assert!(mutated.is_locked(ParamId::StartFrequency));
    assert_eq!(mutated, report.params);
    assert!(out_wav.exists());
}

#[test]
fn test_render_missing_params_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("x.wav");
    let err = render::execute("/nonexistent/params.json", 0, out.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Failed to read parameter file"));
    assert!(!out.exists());
}

#[test]
fn test_json_report_matches_written_files() {
    let tmp = tempfile::tempdir().unwrap();
    let wav = tmp.path().join("boom.wav");
    let json = tmp.path().join("boom.json");

    let report = preset::execute(
        "explosion",
        11,
        Some(wav.to_str().unwrap()),
        Some(json.to_str().unwrap()),
    )
    .unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["command"], "preset");
    assert_eq!(value["archetype"], "explosion");
    assert_eq!(value["seed"], 11);
    assert_eq!(value["wave_type"], "noise");
    assert_eq!(value["wav_path"], wav.to_str().unwrap());
    assert_eq!(
        value["num_samples"].as_u64().unwrap() as usize,
        read_sample_count(&fs::read(&wav).unwrap()).unwrap()
    );

    // The embedded parameters are the same document as the saved file.
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["params"], saved);
}
