//! Property tests for the parameter model and synthesis output.

use blipfx_synth::params::{PARAMETERS, PARAM_COUNT};
use blipfx_synth::rng::{create_engine_rng, create_rng};
use blipfx_synth::{generate_samples, Archetype, ParamId, ParameterSet, WaveType};
use proptest::prelude::*;

fn any_param() -> impl Strategy<Value = ParamId> {
    (0..PARAM_COUNT).prop_map(|i| ParamId::ALL[i])
}

fn any_wave() -> impl Strategy<Value = WaveType> {
    (0..WaveType::COUNT).prop_map(|i| WaveType::ALL[i])
}

fn in_bounds(params: &ParameterSet) -> bool {
    PARAMETERS
        .iter()
        .all(|d| (d.min..=d.max).contains(&params.get(d.id)))
}

proptest! {
    #[test]
    fn setter_always_clamps(id in any_param(), value in prop::num::f64::ANY) {
        let mut params = ParameterSet::new();
        let before = params.get(id);
        params.set(id, value);
        let after = params.get(id);

        let desc = id.descriptor();
        prop_assert!(after >= desc.min && after <= desc.max);
        if value.is_nan() {
            prop_assert_eq!(after, before);
        } else {
            prop_assert_eq!(after, value.clamp(desc.min, desc.max));
        }
    }

    #[test]
    fn mutate_stays_in_bounds(seed in any::<u32>(), amount in 0.0f64..2.0) {
        let mut params = ParameterSet::new();
        params.randomize(&mut create_rng(seed));
        params.mutate(amount, &mut create_rng(seed.wrapping_add(1)));
        prop_assert!(in_bounds(&params));
    }

    #[test]
    fn json_load_always_in_bounds(id in any_param(), value in -1.0e6f64..1.0e6) {
        let json = format!(r#"{{"params": {{"{}": {}}}}}"#, id.name(), value);
        let params = ParameterSet::from_json(&json).unwrap();
        prop_assert!(in_bounds(&params));
    }

    #[test]
    fn locked_params_survive_randomize(seed in any::<u32>(), id in any_param(), value in 0.0f64..1.0) {
        let mut params = ParameterSet::new();
        params.set(id, value);
        let expected = params.get(id);
        params.set_locked(id, true);
        params.randomize(&mut create_rng(seed));
        prop_assert_eq!(params.get(id), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn randomized_sounds_are_finite(seed in any::<u32>()) {
        let mut params = ParameterSet::new();
        params.randomize(&mut create_rng(seed));
        let samples = generate_samples(&params, create_engine_rng(seed));
        prop_assert!(samples.iter().all(|s| s.is_finite() && (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn presets_on_any_wave_are_finite(seed in any::<u32>(), index in 0..Archetype::ALL.len(), wave in any_wave()) {
        let mut params = ParameterSet::new();
        params.generate(Archetype::ALL[index], &mut create_rng(seed));
        params.set_wave_type(wave);
        let samples = generate_samples(&params, create_engine_rng(seed));
        prop_assert!(!samples.is_empty());
        prop_assert!(samples.iter().all(|s| s.is_finite() && (-1.0..=1.0).contains(s)));
    }
}
