#![no_main]

use blipfx_synth::rng::create_engine_rng;
use blipfx_synth::{generate_samples, ParameterSet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(params) = ParameterSet::from_json(json) else {
        return;
    };

    let samples = generate_samples(&params, create_engine_rng(0));
    assert!(samples.iter().all(|s| s.is_finite() && (-1.0..=1.0).contains(s)));

    // Saving and reloading must not fail.
    if let Ok(out) = params.to_json_pretty() {
        let _ = serde_json::from_str::<serde_json::Value>(&out).unwrap();
        ParameterSet::from_json(&out).unwrap();
    }
});
